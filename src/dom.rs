//! Binds the page's card elements to a [`Board`] and mirrors board state back
//! onto them (flip class + CSS `order`).

use std::cell::RefCell;

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{HtmlElement, window};

use crate::board::{Board, Deferred, Outcome, Scheduler};
use crate::celebration;
use crate::config::GameConfig;
use crate::error::GameError;
use crate::rng::GameRng;

struct Game {
    board: Board,
    cards: Vec<HtmlElement>,
    config: GameConfig,
}

thread_local! {
    static GAME: RefCell<Option<Game>> = const { RefCell::new(None) };
}

/// Fires deferred board tasks with browser timeouts.
struct BrowserTimers;

impl Scheduler for BrowserTimers {
    fn schedule(&mut self, delay_ms: u32, task: Deferred) {
        Timeout::new(delay_ms, move || on_deferred(task)).forget();
    }
}

pub(crate) fn mount(config: GameConfig) -> Result<(), GameError> {
    if GAME.with(|cell| cell.borrow().is_some()) {
        log::warn!("game already mounted; ignoring");
        return Ok(());
    }
    let win = window().ok_or(GameError::NoWindow)?;
    let doc = win.document().ok_or(GameError::NoDocument)?;

    let nodes = doc.query_selector_all(&config.board.card_selector)?;
    let mut cards = Vec::with_capacity(nodes.length() as usize);
    let mut tokens = Vec::with_capacity(nodes.length() as usize);
    for i in 0..nodes.length() {
        let Some(node) = nodes.item(i) else { continue };
        let el: HtmlElement = node
            .dyn_into()
            .map_err(|_| GameError::Dom(format!("card #{i} is not an HTML element")))?;
        tokens.push(el.get_attribute(&config.board.token_attribute).unwrap_or_default());
        cards.push(el);
    }
    if cards.is_empty() {
        return Err(GameError::NoCards(config.board.card_selector.clone()));
    }
    if cards.len() % 2 != 0 {
        log::warn!("odd number of cards ({}); one card can never match", cards.len());
    }

    for (index, el) in cards.iter().enumerate() {
        let closure = Closure::wrap(Box::new(move |_evt: web_sys::MouseEvent| {
            on_card_click(index);
        }) as Box<dyn FnMut(_)>);
        el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    let board = Board::new(tokens, &config.board, GameRng::from_entropy());
    log::info!("bound {} cards ({} pairs)", cards.len(), board.total_pairs());
    let game = Game { board, cards, config };
    game.sync();
    GAME.with(|cell| cell.replace(Some(game)));
    Ok(())
}

/// Start a new round after the celebration screen is dismissed.
pub(crate) fn restart() {
    GAME.with(|cell| {
        if let Some(game) = cell.borrow_mut().as_mut() {
            game.board.restart(&mut BrowserTimers);
            log::info!("round {} started", game.board.round());
            game.sync();
        }
    });
}

fn on_card_click(index: usize) {
    GAME.with(|cell| {
        if let Some(game) = cell.borrow_mut().as_mut() {
            let outcome = game.board.select(index, &mut BrowserTimers);
            log::debug!("card {index}: {outcome:?}");
            if outcome != Outcome::Ignored {
                game.sync();
            }
        }
    });
}

fn on_deferred(task: Deferred) {
    let celebrate = GAME.with(|cell| {
        let mut guard = cell.borrow_mut();
        let game = guard.as_mut()?;
        let outcome = game.board.run(task);
        log::debug!("{task:?}: {outcome:?}");
        game.sync();
        (outcome == Outcome::Completed).then(|| game.config.clone())
    });
    // Outside the board borrow: the celebration owns its own state.
    if let Some(config) = celebrate {
        log::info!("all pairs matched");
        if let Err(err) = celebration::show(&config) {
            log::error!("could not show celebration: {err}");
        }
    }
}

impl Game {
    fn sync(&self) {
        let flip = &self.config.board.flip_class;
        for (card, el) in self.board.cards().iter().zip(&self.cards) {
            if let Err(err) = el.class_list().toggle_with_force(flip, card.is_face_up()) {
                log::error!("class toggle failed: {err:?}");
            }
            if let Err(err) = el.style().set_property("order", &card.order().to_string()) {
                log::error!("order update failed: {err:?}");
            }
        }
    }
}
