use crate::deck::Deck;
use log::debug;

use super::{AppState, Arrangement, Scene, ShuffleMode};

#[derive(Debug, Clone, Copy)]
enum MenuItem {
    ShuffleMode,
    Seed,
}

const MENU_ITEMS: [MenuItem; 2] = [MenuItem::ShuffleMode, MenuItem::Seed];

impl MenuItem {
    fn display(self, app: &AppState) -> String {
        match self {
            MenuItem::ShuffleMode => {
                format!("Shuffle: {}", AppState::shuffle_mode_label(app.cfg_shuffle_mode))
            }
            MenuItem::Seed => match app.cfg_shuffle_mode {
                ShuffleMode::Seeded => format!("Seed: {}", app.cfg_seed),
                ShuffleMode::Random => format!("Seed: {} (unused)", app.cfg_seed),
            },
        }
    }

    fn inc(self, app: &mut AppState) {
        match self {
            MenuItem::ShuffleMode => app.cfg_shuffle_mode = toggled(app.cfg_shuffle_mode),
            MenuItem::Seed => app.cfg_seed = app.cfg_seed.wrapping_add(1),
        }
    }

    fn dec(self, app: &mut AppState) {
        match self {
            MenuItem::ShuffleMode => app.cfg_shuffle_mode = toggled(app.cfg_shuffle_mode),
            MenuItem::Seed => app.cfg_seed = app.cfg_seed.wrapping_sub(1),
        }
    }
}

fn toggled(mode: ShuffleMode) -> ShuffleMode {
    match mode {
        ShuffleMode::Random => ShuffleMode::Seeded,
        ShuffleMode::Seeded => ShuffleMode::Random,
    }
}

impl AppState {
    pub fn shuffle_mode_label(mode: ShuffleMode) -> &'static str {
        match mode {
            ShuffleMode::Random => "Random",
            ShuffleMode::Seeded => "Seeded",
        }
    }

    pub fn menu_items_display(&self) -> Vec<String> {
        MENU_ITEMS.iter().map(|item| item.display(self)).collect()
    }

    pub fn toggle_menu(&mut self) {
        self.close_help();
        self.scene = match self.scene {
            Scene::Menu => Scene::Deck,
            _ => {
                self.open_menu();
                Scene::Menu
            }
        };
    }

    // --- Menu operations ---
    pub fn open_menu(&mut self) {
        self.close_help();
        self.menu_index = 0;
        self.cfg_shuffle_mode = self.shuffle_mode;
        self.cfg_seed = self.seed;
        self.scene = Scene::Menu;
    }

    /// Commit the edited settings and start over with a canonical deck.
    pub fn apply_menu(&mut self) {
        self.shuffle_mode = self.cfg_shuffle_mode;
        self.seed = self.cfg_seed;
        self.deck = Deck::standard();
        self.reseed();
        self.cursor = 0;
        self.reversed = false;
        self.suit_filter = None;
        self.shuffles = 0;
        self.arrangement = Arrangement::Canonical;
        self.scene = Scene::Deck;
        debug!("applied menu: mode={:?} seed={}", self.shuffle_mode, self.seed);
    }

    pub fn cancel_menu(&mut self) {
        self.scene = Scene::Deck;
    }

    pub fn menu_next(&mut self) {
        self.menu_index = (self.menu_index + 1) % MENU_ITEMS.len();
    }
    pub fn menu_prev(&mut self) {
        self.menu_index = (self.menu_index + MENU_ITEMS.len() - 1) % MENU_ITEMS.len();
    }
    pub fn menu_inc(&mut self) {
        let item = MENU_ITEMS[self.menu_index % MENU_ITEMS.len()];
        item.inc(self);
    }
    pub fn menu_dec(&mut self) {
        let item = MENU_ITEMS[self.menu_index % MENU_ITEMS.len()];
        item.dec(self);
    }
}
