use crossterm::event::KeyCode;
use deck_vector::cards::{Card, Rank, Suit};
use deck_vector::deck::{Deck, SortOrder};
use deck_vector::tui::app::{AppState, Arrangement, InputAction, Scene, ShuffleMode};
use deck_vector::tui::controller::handle_key;

fn setup_deck_app() -> AppState {
    let mut app = AppState::default();
    app.apply_menu();
    app
}

#[test]
fn menu_navigation_and_apply() {
    let mut app = AppState::default();
    assert!(matches!(app.scene, Scene::Menu));
    let start = app.menu_index;
    let _ = app.handle_input(InputAction::MenuNext);
    assert_ne!(app.menu_index, start);
    let _ = app.handle_input(InputAction::MenuPrev);
    assert_eq!(app.menu_index, start);
    let _ = app.handle_input(InputAction::MenuApply);
    assert!(matches!(app.scene, Scene::Deck));
}

#[test]
fn seeded_mode_is_reproducible() {
    let mut app = AppState::default();
    let _ = app.handle_input(InputAction::MenuInc);
    assert_eq!(app.cfg_shuffle_mode, ShuffleMode::Seeded);
    let _ = app.handle_input(InputAction::MenuNext);
    let _ = app.handle_input(InputAction::MenuInc);
    let seed = app.cfg_seed;
    let _ = app.handle_input(InputAction::MenuApply);
    assert_eq!(app.seed, seed);

    assert!(app.handle_input(InputAction::Shuffle));
    let first = app.deck.clone();
    assert_eq!(app.arrangement, Arrangement::Shuffled);

    let _ = app.handle_input(InputAction::Reset);
    assert_eq!(app.deck, Deck::standard());
    let _ = app.handle_input(InputAction::Shuffle);
    assert_eq!(app.deck, first);
}

#[test]
fn sorting_keys_update_arrangement() {
    let mut app = setup_deck_app();
    let _ = app.handle_input(InputAction::Shuffle);
    let _ = app.handle_input(InputAction::SortByRank);
    assert_eq!(app.arrangement, Arrangement::Sorted(SortOrder::Rank));
    assert_eq!(app.selected_card(), Some(Card::new(Rank::Two, Suit::Spades)));
    let _ = app.handle_input(InputAction::SortBySuit);
    assert_eq!(app.deck, Deck::standard());
    let _ = app.handle_input(InputAction::SortSpadesHigh);
    assert_eq!(app.selected_card(), Some(Card::new(Rank::Two, Suit::Clubs)));
}

#[test]
fn help_blocks_deck_actions() {
    let mut app = setup_deck_app();
    let _ = app.handle_input(InputAction::ToggleHelp);
    assert!(app.help_open());
    assert!(!app.handle_input(InputAction::Shuffle));
    let _ = app.handle_input(InputAction::ToggleHelp);
    assert!(!app.help_open());
}

#[test]
fn filter_cycles_back_to_all_suits() {
    let mut app = setup_deck_app();
    app.cursor = 40;
    for _ in 0..4 {
        let _ = app.handle_input(InputAction::CycleSuitFilter);
        assert_eq!(app.visible_cards().len(), 13);
        assert!(app.cursor < 13);
    }
    let _ = app.handle_input(InputAction::CycleSuitFilter);
    assert_eq!(app.suit_filter, None);
    assert_eq!(app.visible_cards().len(), 52);
}

#[test]
fn keys_map_to_actions() {
    let mut app = AppState::default();
    assert!(!handle_key(&mut app, KeyCode::Enter));
    assert!(matches!(app.scene, Scene::Deck));
    assert!(!handle_key(&mut app, KeyCode::Right));
    assert_eq!(app.cursor, 1);
    assert!(!handle_key(&mut app, KeyCode::Char('?')));
    assert!(app.help_open());
    assert!(!handle_key(&mut app, KeyCode::Char('q')));
    assert!(!handle_key(&mut app, KeyCode::Esc));
    assert!(!app.help_open());
    assert!(!handle_key(&mut app, KeyCode::Char('m')));
    assert!(matches!(app.scene, Scene::Menu));
    assert!(handle_key(&mut app, KeyCode::Char('q')));
}
