use crate::cards::{high_card, Card, Suit};
use crate::deck::{cards_by_suit, Deck, SortOrder};
use log::debug;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Scene {
    Menu,
    Deck,
}

/// How the browser shuffles: fresh entropy each time, or a reproducible seeded stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShuffleMode {
    Random,
    Seeded,
}

/// What last happened to the deck order, shown in the header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arrangement {
    Canonical,
    Shuffled,
    Sorted(SortOrder),
}

/// High-level input actions for the TUI controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum InputAction {
    MenuNext,
    MenuPrev,
    MenuInc,
    MenuDec,
    MenuApply,
    MenuCancel,
    ToggleMenu,
    ToggleHelp,
    Shuffle,
    SortByRank,
    SortBySuit,
    SortSpadesHigh,
    Reset,
    ToggleReversed,
    CycleSuitFilter,
    CursorLeft,
    CursorRight,
    CursorUp,
    CursorDown,
}

#[derive(Debug)]
#[non_exhaustive]
pub struct AppState {
    pub scene: Scene,
    pub deck: Deck,
    // Index into `visible_cards`, not into the deck
    pub cursor: usize,
    pub reversed: bool,
    pub suit_filter: Option<Suit>,
    pub arrangement: Arrangement,
    pub shuffles: u32,
    // Menu config being edited
    pub menu_index: usize,
    pub cfg_shuffle_mode: ShuffleMode,
    pub cfg_seed: u64,
    pub shuffle_mode: ShuffleMode,
    pub seed: u64,
    rng: ChaCha8Rng,
    help_open: bool,
}

impl Default for AppState {
    fn default() -> Self {
        let seed = 42;
        Self {
            scene: Scene::Menu,
            deck: Deck::standard(),
            cursor: 0,
            reversed: false,
            suit_filter: None,
            arrangement: Arrangement::Canonical,
            shuffles: 0,
            menu_index: 0,
            cfg_shuffle_mode: ShuffleMode::Random,
            cfg_seed: seed,
            shuffle_mode: ShuffleMode::Random,
            seed,
            rng: ChaCha8Rng::seed_from_u64(seed),
            help_open: false,
        }
    }
}

impl AppState {
    /// Cards per grid row in the deck view.
    pub const ROW_LEN: usize = 13;

    pub fn help_open(&self) -> bool {
        self.help_open
    }

    pub(crate) fn close_help(&mut self) {
        self.help_open = false;
    }

    pub(crate) fn reseed(&mut self) {
        self.rng = ChaCha8Rng::seed_from_u64(self.seed);
    }

    /// Cards as currently displayed: filtered by suit, optionally reversed.
    pub fn visible_cards(&self) -> Vec<Card> {
        match (self.suit_filter, self.reversed) {
            (None, false) => self.deck.to_vec(),
            (None, true) => self.deck.rev_iter().copied().collect(),
            (Some(s), false) => cards_by_suit(&self.deck, s),
            (Some(s), true) => cards_by_suit(&self.deck, s).into_iter().rev().collect(),
        }
    }

    pub fn selected_card(&self) -> Option<Card> {
        self.visible_cards().get(self.cursor).copied()
    }

    /// Highest card among the visible ones.
    pub fn visible_high_card(&self) -> Option<Card> {
        high_card(&self.visible_cards()).ok()
    }

    /// Position of the selected card in the underlying deck.
    pub fn selected_deck_position(&self) -> Option<usize> {
        let card = self.selected_card()?;
        self.deck.iter().position(|c| *c == card)
    }

    pub fn handle_input(&mut self, action: InputAction) -> bool {
        match action {
            InputAction::ToggleMenu => {
                self.toggle_menu();
                false
            }
            InputAction::ToggleHelp => {
                if self.scene == Scene::Deck {
                    self.help_open = !self.help_open;
                }
                false
            }
            InputAction::MenuNext => {
                if self.scene == Scene::Menu {
                    self.menu_next();
                }
                false
            }
            InputAction::MenuPrev => {
                if self.scene == Scene::Menu {
                    self.menu_prev();
                }
                false
            }
            InputAction::MenuInc => {
                if self.scene == Scene::Menu {
                    self.menu_inc();
                }
                false
            }
            InputAction::MenuDec => {
                if self.scene == Scene::Menu {
                    self.menu_dec();
                }
                false
            }
            InputAction::MenuApply => {
                if self.scene == Scene::Menu {
                    self.apply_menu();
                }
                false
            }
            InputAction::MenuCancel => {
                if self.scene == Scene::Menu {
                    self.cancel_menu();
                }
                false
            }
            InputAction::Shuffle => self.on_deck(Self::shuffle),
            InputAction::SortByRank => self.on_deck(|app| app.sort(SortOrder::Rank)),
            InputAction::SortBySuit => self.on_deck(|app| app.sort(SortOrder::Suit)),
            InputAction::SortSpadesHigh => self.on_deck(|app| app.sort(SortOrder::SpadesHigh)),
            InputAction::Reset => self.on_deck(Self::reset),
            InputAction::ToggleReversed => self.on_deck(|app| app.reversed = !app.reversed),
            InputAction::CycleSuitFilter => self.on_deck(Self::cycle_suit_filter),
            InputAction::CursorLeft => self.on_deck(|app| app.move_cursor(-1)),
            InputAction::CursorRight => self.on_deck(|app| app.move_cursor(1)),
            InputAction::CursorUp => self.on_deck(|app| app.move_cursor(-(Self::ROW_LEN as isize))),
            InputAction::CursorDown => self.on_deck(|app| app.move_cursor(Self::ROW_LEN as isize)),
        }
    }

    fn on_deck(&mut self, f: impl FnOnce(&mut Self)) -> bool {
        if self.scene != Scene::Deck || self.help_open {
            return false;
        }
        f(self);
        true
    }

    pub fn shuffle(&mut self) {
        match self.shuffle_mode {
            ShuffleMode::Random => self.deck.shuffle(),
            ShuffleMode::Seeded => self.deck.shuffle_with(&mut self.rng),
        }
        self.shuffles += 1;
        self.arrangement = Arrangement::Shuffled;
    }

    pub fn sort(&mut self, order: SortOrder) {
        self.deck.sort_by_order(order);
        self.arrangement = Arrangement::Sorted(order);
    }

    /// Back to a canonical deck; in seeded mode the shuffle stream restarts too.
    pub fn reset(&mut self) {
        self.deck = Deck::standard();
        self.reseed();
        self.shuffles = 0;
        self.cursor = 0;
        self.arrangement = Arrangement::Canonical;
        debug!("browser reset to canonical deck");
    }

    fn cycle_suit_filter(&mut self) {
        self.suit_filter = match self.suit_filter {
            None => Some(Suit::Spades),
            Some(Suit::Spades) => Some(Suit::Hearts),
            Some(Suit::Hearts) => Some(Suit::Diamonds),
            Some(Suit::Diamonds) => Some(Suit::Clubs),
            Some(Suit::Clubs) => None,
        };
        self.clamp_cursor();
    }

    /// Wraps horizontally; vertical moves past either edge stay put.
    fn move_cursor(&mut self, delta: isize) {
        let n = self.visible_cards().len();
        if n == 0 {
            return;
        }
        let cur = self.cursor as isize;
        self.cursor = if delta.unsigned_abs() == 1 {
            (cur + delta).rem_euclid(n as isize) as usize
        } else {
            let next = cur + delta;
            if (0..n as isize).contains(&next) {
                next as usize
            } else {
                self.cursor
            }
        };
    }

    fn clamp_cursor(&mut self) {
        let n = self.visible_cards().len();
        if self.cursor >= n {
            self.cursor = n.saturating_sub(1);
        }
    }
}
