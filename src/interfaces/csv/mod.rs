pub mod command_reader;
pub mod spin_writer;
