use passform::error::{GenerateError, ValidationError};
use passform::pass::{
    CharacterClass, CharacterPool, ClassSet, GenerationRequest, OverflowPolicy, generate,
    validate_length,
};
use passform::rand::{SeededSource, SequenceSource, ThreadSource};

fn classes(list: &[CharacterClass]) -> ClassSet {
    list.iter().copied().collect()
}

#[test]
fn digits_only_length_eight() {
    let req = GenerationRequest::new("8", classes(&[CharacterClass::Digits])).unwrap();
    assert_eq!(req.pool().to_string(), "0123456789");

    let pass = req
        .generate(&mut ThreadSource::thread(), OverflowPolicy::Clamp)
        .unwrap();
    assert_eq!(pass.len(), 8);
    assert!(pass.as_str().chars().all(|c| c.is_ascii_digit()));
}

#[test]
fn uppercase_and_symbols_length_twelve() {
    let set = classes(&[CharacterClass::Uppercase, CharacterClass::Symbols]);
    let req = GenerationRequest::new("12", set).unwrap();
    let pool = req.pool();
    assert_eq!(pool.len(), 41);

    for _ in 0..50 {
        let pass = req
            .generate(&mut ThreadSource::thread(), OverflowPolicy::Clamp)
            .unwrap();
        assert_eq!(pass.len(), 12);
        assert!(pass.as_str().chars().all(|c| pool.contains(c)));
        assert!(!pass.as_str().chars().any(|c| c.is_ascii_lowercase()));
    }
}

#[test]
fn length_boundaries() {
    assert_eq!(validate_length("4"), Ok(4));
    assert_eq!(validate_length("15"), Ok(15));
    assert_eq!(validate_length("3"), Err(ValidationError::TooSmall));
    assert_eq!(validate_length("16"), Err(ValidationError::TooLarge));
    assert_eq!(validate_length(""), Err(ValidationError::Required));
}

#[test]
fn invalid_length_never_reaches_the_generator() {
    let set = ClassSet::default();
    assert_eq!(
        GenerationRequest::new("16", set),
        Err(ValidationError::TooLarge)
    );
    assert_eq!(
        GenerationRequest::new("3", set),
        Err(ValidationError::TooSmall)
    );
}

#[test]
fn no_classes_is_empty_pool() {
    let req = GenerationRequest::new("8", ClassSet::NONE).unwrap();
    assert!(req.pool().is_empty());
    assert_eq!(
        req.generate(&mut ThreadSource::thread(), OverflowPolicy::Clamp),
        Err(GenerateError::EmptyPool)
    );
}

#[test]
fn same_configuration_same_length_not_same_content() {
    let req = GenerationRequest::new("15", ClassSet::default()).unwrap();
    let mut src = SeededSource::seeded(3);
    let a = req.generate(&mut src, OverflowPolicy::Clamp).unwrap();
    let b = req.generate(&mut src, OverflowPolicy::Clamp).unwrap();
    assert_eq!(a.len(), b.len());
    assert_ne!(a, b);
}

#[test]
fn same_seed_same_password() {
    let req = GenerationRequest::new("10", ClassSet::default().with(CharacterClass::Digits, true))
        .unwrap();
    let a = req
        .generate(&mut SeededSource::seeded(2024), OverflowPolicy::Clamp)
        .unwrap();
    let b = req
        .generate(&mut SeededSource::seeded(2024), OverflowPolicy::Clamp)
        .unwrap();
    assert_eq!(a, b);
}

#[test]
fn rounding_picks_nearest_index() {
    let pool = CharacterPool::from("ab");
    // index = round(draw * 2): 1.0, 1.2, 0.4, 1.4
    let mut src = SequenceSource::new([0.5, 0.6, 0.2, 0.7]);
    let pass = generate(&pool, 4, &mut src, OverflowPolicy::Strict).unwrap();
    assert_eq!(pass.as_str(), "bbab");
}

#[test]
fn faithful_policy_drops_overflowing_positions() {
    let pool = CharacterPool::from("xyz");
    // 0.99 * 3 = 2.97 rounds to 3, past the end
    let mut src = SequenceSource::new([0.99, 0.0, 0.99, 0.4]);
    let pass = generate(&pool, 4, &mut src, OverflowPolicy::Faithful).unwrap();
    assert_eq!(pass.as_str(), "xy");

    let mut src = SequenceSource::new([0.99, 0.0, 0.99, 0.4]);
    let pass = generate(&pool, 4, &mut src, OverflowPolicy::Clamp).unwrap();
    assert_eq!(pass.as_str(), "zxzy");
}
