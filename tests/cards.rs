//! Card, deck and scoring tests.

use std::collections::{HashSet, VecDeque};

use bjround::score::{dealer_total, hand_total, player_total, rank_value};
use bjround::{
    AceValue, Card, CardError, Console, DECK_SIZE, Deck, DeckError, Hand, HouseAces, InputError,
    PlayerAces, PlayerTotal, Suit,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn card(suit: Suit, rank: u8) -> Card {
    Card::new(suit, rank).unwrap()
}

struct Answers {
    answers: VecDeque<&'static str>,
    prompts: Vec<String>,
}

impl Answers {
    fn new(answers: &[&'static str]) -> Self {
        Self {
            answers: answers.iter().copied().collect(),
            prompts: Vec::new(),
        }
    }
}

impl Console for Answers {
    fn ask_text(&mut self, prompt: &str) -> Result<String, InputError> {
        self.prompts.push(prompt.to_owned());
        self.answers
            .pop_front()
            .map(str::to_owned)
            .ok_or(InputError::Closed)
    }
}

#[test]
fn fresh_deck_holds_every_card_once() {
    let deck = Deck::new();
    assert_eq!(deck.len(), DECK_SIZE);

    let distinct: HashSet<(u8, u8)> = deck
        .cards()
        .iter()
        .map(|c| (c.suit().index(), c.rank()))
        .collect();
    assert_eq!(distinct.len(), DECK_SIZE);
    for suit in 0..4 {
        for rank in 1..=13 {
            assert!(distinct.contains(&(suit, rank)));
        }
    }

    // Suit-major, rank-minor.
    assert_eq!(deck.cards()[0], card(Suit::Spades, 1));
    assert_eq!(deck.cards()[12], card(Suit::Spades, 13));
    assert_eq!(deck.cards()[13], card(Suit::Hearts, 1));
    assert_eq!(deck.cards()[51], card(Suit::Clubs, 13));
}

#[test]
fn card_construction_is_validated() {
    assert_eq!(Card::new(Suit::Spades, 0), Err(CardError::InvalidRank(0)));
    assert_eq!(Card::new(Suit::Clubs, 14), Err(CardError::InvalidRank(14)));
    assert_eq!(Suit::from_index(4), Err(CardError::InvalidSuit(4)));
    assert_eq!(Card::from_indices(2, 12), Ok(card(Suit::Diamonds, 12)));
}

#[test]
fn cards_order_by_suit_then_rank() {
    assert!(card(Suit::Spades, 13) < card(Suit::Hearts, 1));
    assert!(card(Suit::Hearts, 2) < card(Suit::Hearts, 3));
    assert!(card(Suit::Clubs, 1) > card(Suit::Diamonds, 13));
    assert_eq!(card(Suit::Hearts, 7), card(Suit::Hearts, 7));
}

#[test]
fn cards_render_codes_and_glyphs() {
    assert_eq!(card(Suit::Spades, 1).to_string(), "As");
    assert_eq!(card(Suit::Hearts, 10).to_string(), "Th");
    assert_eq!(card(Suit::Diamonds, 7).to_string(), "7d");
    assert_eq!(card(Suit::Clubs, 13).to_string(), "Kc");

    assert_eq!(card(Suit::Hearts, 11).glyph(), '\u{1F0BB}');
    assert_eq!(card(Suit::Diamonds, 12).glyph(), '\u{1F0CD}');
    assert_eq!(card(Suit::Clubs, 13).glyph(), '\u{1F0DE}');

    let deck = Deck::from_cards(vec![card(Suit::Spades, 1), card(Suit::Hearts, 10)]);
    assert_eq!(deck.to_string(), "As Th");
}

#[test]
fn pop_card_reports_empty_and_bad_positions() {
    let mut deck = Deck::from_cards(vec![card(Suit::Spades, 2), card(Suit::Hearts, 3)]);

    assert_eq!(
        deck.pop_card_at(5),
        Err(DeckError::IndexOutOfRange { index: 5, len: 2 })
    );
    assert_eq!(deck.pop_card_at(0), Ok(card(Suit::Spades, 2)));
    assert_eq!(deck.pop_card(), Ok(card(Suit::Hearts, 3)));
    assert_eq!(deck.pop_card(), Err(DeckError::Empty));
    assert_eq!(deck.pop_card_at(0), Err(DeckError::Empty));
}

#[test]
fn move_cards_conserves_count_and_pop_order() {
    let mut deck = Deck::new();
    let mut hand = Hand::new("Player");

    deck.move_cards(&mut hand, 3).unwrap();

    assert_eq!(deck.len() + hand.len(), DECK_SIZE);
    assert_eq!(
        hand.cards(),
        &[
            card(Suit::Clubs, 13),
            card(Suit::Clubs, 12),
            card(Suit::Clubs, 11)
        ]
    );
    // Adding cards does not score them.
    assert_eq!(hand.total(), 0);
}

#[test]
fn move_cards_is_all_or_nothing() {
    let mut deck = Deck::from_cards(vec![card(Suit::Spades, 4), card(Suit::Spades, 5)]);
    let mut hand = Hand::new("Dealer");

    assert_eq!(
        deck.move_cards(&mut hand, 3),
        Err(DeckError::NotEnoughCards {
            requested: 3,
            available: 2
        })
    );
    assert_eq!(deck.len(), 2);
    assert!(hand.is_empty());

    let mut empty = Deck::empty();
    assert_eq!(empty.move_cards(&mut hand, 1), Err(DeckError::Empty));
    assert_eq!(empty.move_cards(&mut hand, 0), Ok(()));
}

#[test]
fn remove_and_add_cards() {
    let mut deck = Deck::new();
    let queen = card(Suit::Hearts, 12);

    deck.remove_card(&queen).unwrap();
    assert_eq!(deck.len(), DECK_SIZE - 1);
    assert_eq!(deck.remove_card(&queen), Err(DeckError::CardNotFound(queen)));

    deck.add_card(queen);
    assert_eq!(deck.cards().last(), Some(&queen));
}

#[test]
fn shuffle_is_a_seeded_permutation() {
    let mut a = Deck::new();
    let mut b = Deck::new();
    a.shuffle(&mut ChaCha8Rng::seed_from_u64(7));
    b.shuffle(&mut ChaCha8Rng::seed_from_u64(7));
    assert_eq!(a, b);
    assert_ne!(a, Deck::new());

    a.sort_descending();
    assert_eq!(a.cards()[0], card(Suit::Clubs, 13));
    a.sort();
    assert_eq!(a, Deck::new());
}

#[test]
fn rank_values() {
    assert_eq!(rank_value(2), 2);
    assert_eq!(rank_value(10), 10);
    assert_eq!(rank_value(11), 10);
    assert_eq!(rank_value(13), 10);
}

#[test]
fn dealer_total_without_aces_ignores_order() {
    let cards = [
        card(Suit::Hearts, 13),
        card(Suit::Spades, 5),
        card(Suit::Clubs, 3),
    ];
    let orders = [[0, 1, 2], [0, 2, 1], [1, 0, 2], [1, 2, 0], [2, 0, 1], [2, 1, 0]];

    for order in orders {
        let shuffled: Vec<Card> = order.iter().map(|&i| cards[i]).collect();
        assert_eq!(dealer_total(&shuffled, HouseAces::default()), 18);
    }
}

#[test]
fn dealer_ace_counts_high_up_to_ten() {
    let aces = HouseAces::default();
    assert_eq!(aces.value(10), AceValue::Eleven);
    assert_eq!(aces.value(11), AceValue::One);

    // Ace of clubs sorts ahead of the nine of spades: 11 + 9.
    let mut hand = Hand::new("Dealer");
    hand.add_card(card(Suit::Spades, 9));
    hand.add_card(card(Suit::Clubs, 1));
    hand.sort_descending();
    assert_eq!(dealer_total(hand.cards(), aces), 20);

    // King and five of clubs come first, so the ace of spades counts 1.
    let mut hand = Hand::new("Dealer");
    hand.add_card(card(Suit::Spades, 1));
    hand.add_card(card(Suit::Clubs, 5));
    hand.add_card(card(Suit::Clubs, 13));
    hand.sort_descending();
    assert_eq!(dealer_total(hand.cards(), aces), 16);
}

#[test]
fn dealer_ace_position_depends_on_suit() {
    // Sorted by (suit, rank) the ace of clubs is scored first and counts 11,
    // even though a rank-only order would have made it 1.
    let mut hand = Hand::new("Dealer");
    hand.add_card(card(Suit::Spades, 5));
    hand.add_card(card(Suit::Clubs, 1));
    hand.add_card(card(Suit::Spades, 13));
    hand.sort_descending();

    assert_eq!(
        hand.cards(),
        &[
            card(Suit::Clubs, 1),
            card(Suit::Spades, 13),
            card(Suit::Spades, 5)
        ]
    );
    assert_eq!(dealer_total(hand.cards(), HouseAces::default()), 26);
}

#[test]
fn player_bust_is_classified() {
    let cards = [
        card(Suit::Spades, 13),
        card(Suit::Hearts, 12),
        card(Suit::Diamonds, 5),
    ];
    let total = player_total(&cards, &mut |_: u8| AceValue::One).unwrap();
    assert_eq!(total, PlayerTotal::Bust(25));
    assert!(total.is_bust());
    assert_eq!(total.points(), 25);
}

#[test]
fn player_aces_use_the_resolver() {
    let cards = [card(Suit::Diamonds, 7), card(Suit::Spades, 1)];
    let mut seen = Vec::new();
    let total = hand_total(&cards, &mut |so_far: u8| {
        seen.push(so_far);
        AceValue::Eleven
    })
    .unwrap();

    assert_eq!(total, 18);
    assert_eq!(seen, vec![7]);
    assert_eq!(
        player_total(&cards, &mut |_: u8| AceValue::One),
        Ok(PlayerTotal::Stand(8))
    );
}

#[test]
fn player_ace_choice_is_asked_until_valid() {
    let mut console = Answers::new(&["5", "abc", "11"]);
    let cards = [card(Suit::Hearts, 9), card(Suit::Clubs, 1)];

    let total = player_total(&cards, &mut PlayerAces::new(&mut console)).unwrap();

    assert_eq!(total, PlayerTotal::Stand(20));
    assert_eq!(console.prompts, vec!["11 or 1 \n", "11 or 1\n", "11 or 1\n"]);
}

#[test]
fn player_ace_choice_fails_when_input_closes() {
    let mut console = Answers::new(&["3"]);
    let cards = [card(Suit::Hearts, 1)];

    assert_eq!(
        player_total(&cards, &mut PlayerAces::new(&mut console)),
        Err(InputError::Closed)
    );
}
