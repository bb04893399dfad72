/// Source of uniform unit values in `[0, 1)` for the symbol draw.
///
/// The only nondeterministic input of a session. Swap in a seeded or
/// scripted source to make spins reproducible.
pub trait RandomSource: Send {
    fn next_unit(&mut self) -> f64;
}

impl<F> RandomSource for F
where
    F: FnMut() -> f64 + Send,
{
    fn next_unit(&mut self) -> f64 {
        self()
    }
}

pub type RandomSourceBox = Box<dyn RandomSource>;
