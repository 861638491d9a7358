use std::time::Instant;

use crossterm::event::KeyCode;

use crate::models::{Drink, ShoppingList};

use super::toast::Toaster;

pub enum AppAction {
    Continue, // Keep running
    Exit,     // Esc pressed - leave the terminal
}

/// Side effects requested by key handling, drained and executed by the main
/// loop so the app state itself stays free of IO.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Search { seq: u64, query: String },
    Print { text: String },
}

/// Completed search delivered back to the app. `seq` identifies which
/// submission produced it; outcomes from superseded submissions are dropped.
#[derive(Debug)]
pub struct SearchOutcome {
    pub seq: u64,
    pub drinks: Vec<Drink>,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Focus {
    Search,
    Drinks,
    Shopping,
}

impl Focus {
    fn next(self) -> Self {
        match self {
            Focus::Search => Focus::Drinks,
            Focus::Drinks => Focus::Shopping,
            Focus::Shopping => Focus::Search,
        }
    }

    fn prev(self) -> Self {
        match self {
            Focus::Search => Focus::Shopping,
            Focus::Drinks => Focus::Search,
            Focus::Shopping => Focus::Drinks,
        }
    }
}

pub struct App {
    query: String,
    drinks: Vec<Drink>,
    shopping: ShoppingList,
    toaster: Toaster,
    has_searched: bool,
    focus: Focus,
    drink_cursor: usize,
    shopping_cursor: usize,
    search_seq: u64,
    pending: Vec<Command>,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    pub fn new() -> Self {
        Self {
            query: String::from("marg"),
            drinks: Vec::new(),
            shopping: ShoppingList::new(),
            toaster: Toaster::new(),
            has_searched: false,
            focus: Focus::Search,
            drink_cursor: 0,
            shopping_cursor: 0,
            search_seq: 0,
            pending: Vec::new(),
        }
    }

    pub fn handle_key(&mut self, key: KeyCode, now: Instant) -> AppAction {
        // global exit behavior
        if key == KeyCode::Esc {
            return AppAction::Exit;
        }

        match key {
            KeyCode::Tab => {
                self.focus = self.focus.next();
                return AppAction::Continue;
            }
            KeyCode::BackTab => {
                self.focus = self.focus.prev();
                return AppAction::Continue;
            }
            _ => {}
        }

        match self.focus {
            Focus::Search => match key {
                KeyCode::Char(c) => self.query.push(c),
                KeyCode::Backspace => {
                    self.query.pop();
                }
                KeyCode::Enter => self.submit_search(now),
                _ => {}
            },
            Focus::Drinks => match key {
                KeyCode::Up => self.drink_cursor = self.drink_cursor.saturating_sub(1),
                KeyCode::Down => {
                    if self.drink_cursor + 1 < self.drinks.len() {
                        self.drink_cursor += 1;
                    }
                }
                KeyCode::Enter | KeyCode::Char('a') => self.add_selected(now),
                _ => {}
            },
            Focus::Shopping => match key {
                KeyCode::Up => self.shopping_cursor = self.shopping_cursor.saturating_sub(1),
                KeyCode::Down => {
                    if self.shopping_cursor + 1 < self.shopping.len() {
                        self.shopping_cursor += 1;
                    }
                }
                KeyCode::Delete | KeyCode::Char('d') => self.remove_selected(now),
                KeyCode::Char('c') => self.clear_list(now),
                KeyCode::Char('p') => self.request_print(),
                _ => {}
            },
        }

        AppAction::Continue
    }

    /// Submit the current query. A blank query is a silent no-op; otherwise
    /// the search is tagged with a fresh sequence number and queued for the
    /// main loop to dispatch.
    fn submit_search(&mut self, now: Instant) {
        if self.query.trim().is_empty() {
            return;
        }

        self.toaster.show("Searching...", now);
        self.has_searched = true;
        self.search_seq += 1;
        self.pending.push(Command::Search {
            seq: self.search_seq,
            query: self.query.clone(),
        });
    }

    /// Apply a completed search. Outcomes carrying a stale sequence number
    /// (a later search was submitted while this one was in flight) are
    /// discarded, so the last submitted search always wins.
    pub fn apply_search(&mut self, outcome: SearchOutcome) {
        if outcome.seq != self.search_seq {
            return;
        }

        self.drinks = outcome.drinks;
        self.drink_cursor = 0;
        // The query box resets once the search settles
        self.query.clear();
    }

    fn add_selected(&mut self, now: Instant) {
        let Some(drink) = self.drinks.get(self.drink_cursor) else {
            return;
        };

        self.shopping.add_batch(drink.ingredients.iter().cloned());
        self.toaster.show("Ingredients added to shopping list!", now);
    }

    fn remove_selected(&mut self, now: Instant) {
        let Some(name) = self.shopping.get(self.shopping_cursor).map(|i| i.name.clone()) else {
            return;
        };

        self.shopping.remove(&name);
        if self.shopping_cursor > 0 && self.shopping_cursor >= self.shopping.len() {
            self.shopping_cursor -= 1;
        }
        self.toaster.show("Item removed!", now);
    }

    fn clear_list(&mut self, now: Instant) {
        self.shopping.clear();
        self.shopping_cursor = 0;
        self.toaster.show("List cleared!", now);
    }

    fn request_print(&mut self) {
        if self.shopping.is_empty() {
            return;
        }

        self.pending.push(Command::Print {
            text: self.shopping.to_text(),
        });
    }

    /// Advance the toast notifier's deadlines.
    pub fn tick(&mut self, now: Instant) {
        self.toaster.tick(now);
    }

    /// Drain the side effects requested since the last drain.
    pub fn take_commands(&mut self) -> Vec<Command> {
        std::mem::take(&mut self.pending)
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn drinks(&self) -> &[Drink] {
        &self.drinks
    }

    pub fn drink_cursor(&self) -> usize {
        self.drink_cursor
    }

    pub fn shopping(&self) -> &ShoppingList {
        &self.shopping
    }

    pub fn shopping_cursor(&self) -> usize {
        self.shopping_cursor
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn has_searched(&self) -> bool {
        self.has_searched
    }

    pub fn toast_message(&self) -> Option<&str> {
        self.toaster.message()
    }
}
