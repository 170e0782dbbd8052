//! Dealing a shuffled deck of pairs.

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::core::{Card, CardId, GameRng, Symbol};

/// Deal `pairs` pairs: symbols `0..pairs`, each twice, in a uniform random
/// order. Card ids are assigned after shuffling, so `cards[i].id == i`.
#[must_use]
pub fn deal(pairs: usize, rng: &mut GameRng) -> Vec<Card> {
    let mut symbols: Vec<Symbol> = (0..pairs as u16).map(Symbol::new).collect();
    symbols.extend_from_within(..);
    rng.shuffle(&mut symbols);

    symbols
        .into_iter()
        .enumerate()
        .map(|(index, symbol)| Card::new(CardId::new(index as u16), symbol))
        .collect()
}

/// Positions of each symbol in a deck.
#[must_use]
pub fn symbol_positions(cards: &[Card]) -> FxHashMap<Symbol, SmallVec<[CardId; 2]>> {
    let mut positions: FxHashMap<Symbol, SmallVec<[CardId; 2]>> = FxHashMap::default();
    for card in cards {
        positions.entry(card.symbol).or_default().push(card.id);
    }
    positions
}

/// Every symbol appears exactly twice and ids match positions.
#[must_use]
pub fn is_well_paired(cards: &[Card]) -> bool {
    let ids_in_order = cards.iter().enumerate().all(|(i, c)| c.id.index() == i);
    let positions = symbol_positions(cards);

    ids_in_order
        && cards.len() % 2 == 0
        && positions.len() == cards.len() / 2
        && positions.values().all(|ids| ids.len() == 2)
}
