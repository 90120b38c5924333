mod common;

use common::{action, coord_on, key_at, wasd_on_qwerty};
use keyshift::{KeyCode, Keyboard, LayoutError, LayoutId, LayoutRegistry};
use rstest::rstest;
use std::sync::Arc;

#[test]
fn test_wasd_switch_to_azerty_decided_by_row_sizes() {
    let mut kb = wasd_on_qwerty();
    let base = kb.base_coordinate();
    let offsets = kb.configuration().to_vec();

    let registry = LayoutRegistry::builtin();
    let azerty = registry.lookup(LayoutId::Azerty).unwrap();
    let sizes = azerty.row_sizes();
    let fits = offsets.iter().all(|off| {
        let (row, col) = base.shifted(*off);
        row >= 0 && (row as usize) < sizes.len() && col >= 0 && (col as usize) < sizes[row as usize]
    });

    let result = kb.switch_layout(LayoutId::Azerty);
    if fits {
        result.unwrap();
        assert_eq!(kb.current_layout(), LayoutId::Azerty);
        let (row, col) = base.shifted(offsets[action::LEFT]);
        assert_eq!(
            Some(kb.resolve_key(action::LEFT).unwrap()),
            key_at(LayoutId::Azerty, row, col)
        );
    } else {
        assert!(matches!(result, Err(LayoutError::InvalidConfiguration { .. })));
        assert_eq!(kb.current_layout(), LayoutId::Qwerty);
    }
}

#[test]
fn test_wasd_follows_physical_positions() {
    let mut kb = wasd_on_qwerty();

    kb.switch_layout(LayoutId::Azerty).unwrap();
    assert_eq!(
        kb.resolved_keys(),
        vec![KeyCode::Z, KeyCode::Q, KeyCode::S, KeyCode::D]
    );

    kb.switch_layout(LayoutId::DvorakUs).unwrap();
    assert_eq!(
        kb.resolved_keys(),
        vec![KeyCode::Comma, KeyCode::A, KeyCode::O, KeyCode::E]
    );

    kb.switch_layout(LayoutId::Colemak).unwrap();
    assert_eq!(
        kb.resolved_keys(),
        vec![KeyCode::W, KeyCode::A, KeyCode::R, KeyCode::S]
    );

    kb.switch_layout(LayoutId::Qwerty).unwrap();
    assert_eq!(
        kb.resolved_keys(),
        vec![KeyCode::W, KeyCode::A, KeyCode::S, KeyCode::D]
    );
}

#[test]
fn test_base_is_carried_numerically() {
    let mut kb = wasd_on_qwerty();
    let base = kb.base_coordinate();
    kb.switch_layout(LayoutId::Azerty).unwrap();

    assert_eq!(kb.base_coordinate(), base);
    // The key under the base changes identity.
    assert_eq!(kb.resolve_key(action::UP).unwrap(), KeyCode::Z);
    assert_eq!(kb.coordinate_of(KeyCode::W), Some(coord_on(LayoutId::Azerty, KeyCode::W)));
}

#[test]
fn test_failed_switch_leaves_state_untouched() {
    let a = wasd_on_qwerty();
    let mut b = Keyboard::derived(&a, KeyCode::P).unwrap();

    let layout = b.current_layout();
    let grid = b.grid().clone();
    let base = b.base_coordinate();
    let offsets = b.configuration().to_vec();
    let keys = b.resolved_keys();

    // RIGHT lands on column 10 of the home row, AZERTY's home row has 10 keys.
    let err = b.switch_layout(LayoutId::Azerty).unwrap_err();
    match err {
        LayoutError::InvalidConfiguration {
            layout: l,
            action: act,
            row,
            col,
        } => {
            assert_eq!(l, LayoutId::Azerty);
            assert_eq!(act, action::RIGHT);
            assert_eq!((row, col), (1, 10));
        }
        other => panic!("unexpected error: {}", other),
    }

    assert_eq!(b.current_layout(), layout);
    assert_eq!(b.grid(), &grid);
    assert_eq!(b.base_coordinate(), base);
    assert_eq!(b.configuration(), offsets.as_slice());
    assert_eq!(b.resolved_keys(), keys);
    assert_eq!(b.coordinate_of(KeyCode::Quote), Some(coord_on(LayoutId::Qwerty, KeyCode::Quote)));
}

#[test]
fn test_failed_switch_from_azerty() {
    let mut kb = Keyboard::new(LayoutId::Azerty, &[KeyCode::Exclaim, KeyCode::Colon]).unwrap();
    assert!(kb.switch_layout(LayoutId::Qwerty).is_err());
    assert_eq!(kb.current_layout(), LayoutId::Azerty);
    assert_eq!(kb.resolve_key(0).unwrap(), KeyCode::Exclaim);
}

#[test]
fn test_unsupported_switch_keeps_layout() {
    let mut registry = LayoutRegistry::empty();
    registry
        .insert(LayoutId::Qwerty, LayoutId::Qwerty.builtin_rows())
        .unwrap();
    let mut kb = Keyboard::with_registry(
        Arc::new(registry),
        LayoutId::Qwerty,
        &common::WASD,
    )
    .unwrap();

    let err = kb.switch_layout(LayoutId::Azerty).unwrap_err();
    assert!(matches!(err, LayoutError::UnsupportedLayout(name) if name == "azerty"));
    assert_eq!(kb.current_layout(), LayoutId::Qwerty);
}

#[rstest]
#[case(LayoutId::Qwerty)]
#[case(LayoutId::DvorakUs)]
#[case(LayoutId::Azerty)]
#[case(LayoutId::Colemak)]
fn test_reswitch_to_current_layout_is_idempotent(#[case] layout: LayoutId) {
    let mut kb = Keyboard::new(layout, &[KeyCode::D, KeyCode::S]).unwrap();
    let grid = kb.grid().clone();
    let base = kb.base_coordinate();
    let keys = kb.resolved_keys();

    kb.switch_layout(layout).unwrap();

    assert_eq!(kb.current_layout(), layout);
    assert_eq!(kb.grid(), &grid);
    assert_eq!(kb.base_coordinate(), base);
    assert_eq!(kb.resolved_keys(), keys);
}

#[test]
fn test_check_switch_does_not_commit() {
    let a = wasd_on_qwerty();
    let b = Keyboard::derived(&a, KeyCode::P).unwrap();

    assert!(b.check_switch(LayoutId::DvorakUs).is_ok());
    assert!(matches!(
        b.check_switch(LayoutId::Azerty),
        Err(LayoutError::InvalidConfiguration { .. })
    ));
    assert_eq!(b.current_layout(), LayoutId::Qwerty);
}

#[test]
fn test_compatible_layouts() {
    let a = wasd_on_qwerty();
    assert_eq!(
        a.compatible_layouts(),
        vec![
            LayoutId::Qwerty,
            LayoutId::DvorakUs,
            LayoutId::Azerty,
            LayoutId::Colemak
        ]
    );

    let b = Keyboard::derived(&a, KeyCode::P).unwrap();
    assert_eq!(
        b.compatible_layouts(),
        vec![LayoutId::Qwerty, LayoutId::DvorakUs, LayoutId::Colemak]
    );
}

#[test]
fn test_derived_binding_switches_independently() {
    let mut a = wasd_on_qwerty();
    let mut b = Keyboard::derived(&a, KeyCode::P).unwrap();

    a.switch_layout(LayoutId::DvorakUs).unwrap();
    assert_eq!(b.current_layout(), LayoutId::Qwerty);

    b.switch_layout(LayoutId::DvorakUs).unwrap();
    assert_eq!(
        b.resolved_keys(),
        vec![KeyCode::L, KeyCode::N, KeyCode::S, KeyCode::Minus]
    );
}
