use comboslot::application::engine::SessionEngine;
use comboslot::domain::config::GameConfig;
use comboslot::domain::ports::{RandomSource, RandomSourceBox};
use comboslot::infrastructure::random::{RngSource, ScriptedSource};

#[test]
fn test_sources_as_trait_objects() {
    let mut counter = 0.0;
    let sources: Vec<RandomSourceBox> = vec![
        Box::new(RngSource::seeded(1)),
        Box::new(ScriptedSource::new(vec![0.5])),
        Box::new(move || {
            counter += 0.1;
            counter % 1.0
        }),
    ];

    for mut source in sources {
        let unit = source.next_unit();
        assert!((0.0..1.0).contains(&unit));
    }
}

#[test]
fn test_closure_source_drives_engine() {
    // 0.99 lands on the trailing empty symbol of the stock table.
    let mut engine = SessionEngine::configure(GameConfig::default(), || 0.99).unwrap();
    let result = engine.spin().into_result().unwrap();
    assert_eq!(result.symbol, "❌");
}

#[test]
fn test_engine_is_send() {
    fn assert_send<T: Send>() {}
    assert_send::<SessionEngine>();
}
