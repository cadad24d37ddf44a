//! Character cards and the stock draft pool.

use serde::{Deserialize, Serialize};

/// A drawable character card. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    /// Character name.
    name: String,
    /// Tier label, e.g. "Yonko (S-Tier)".
    rank: String,
}

impl Card {
    /// Creates a card from a name and rank label.
    pub fn new(name: impl Into<String>, rank: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rank: rank.into(),
        }
    }

    /// Character name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Tier label.
    pub fn rank(&self) -> &str {
        &self.rank
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} (Rank: {})", self.name, self.rank)
    }
}

/// Name/rank pairs for the built-in pool.
const POOL: &[(&str, &str)] = &[
    // S-Tier (Yonko/Admirals/Legendary level)
    ("Monkey D. Luffy", "Yonko (S-Tier)"),
    ("Shanks", "Yonko (S-Tier)"),
    ("Mihawk", "WSS (S-Tier)"),
    ("Whitebeard", "Former Yonko (S-Tier)"),
    ("Kaido", "Former Yonko (S-Tier)"),
    ("Big Mom", "Former Yonko (S-Tier)"),
    ("Blackbeard", "Yonko (S-Tier)"),
    ("Akainu", "Fleet Admiral (S-Tier)"),
    ("Aokiji", "Admiral (S-Tier)"),
    ("Kizaru", "Admiral (S-Tier)"),
    ("Fujitora", "Admiral (S-Tier)"),
    ("Greenbull", "Admiral (S-Tier)"),
    ("Sengoku", "Former Fleet Admiral (S-Tier)"),
    ("Garp", "Hero of Marines (S-Tier)"),
    ("Dragon", "Revolutionary Leader (S-Tier)"),
    // A-Tier (Commanders/Supernovas/Warlords)
    ("Roronoa Zoro", "Commander (A-Tier)"),
    ("Vinsmoke Sanji", "Commander (A-Tier)"),
    ("Sabo", "Revolutionary Chief (A-Tier)"),
    ("Ace", "Commander (A-Tier)"),
    ("Yamato", "Kaido's Son (A-Tier)"),
    ("Law", "Supernova (A-Tier)"),
    ("Kid", "Supernova (A-Tier)"),
    ("Boa Hancock", "Warlord (A-Tier)"),
    ("Ben Beckman", "First Mate (A-Tier)"),
    ("Lucky Roo", "Red Hair Commander (A-Tier)"),
    ("Yasopp", "Red Hair Sniper (A-Tier)"),
    ("Marco", "First Division Commander (A-Tier)"),
    ("Jozu", "Third Division Commander (A-Tier)"),
    ("Vista", "Fifth Division Commander (A-Tier)"),
    ("King", "All-Star (A-Tier)"),
    ("Queen", "All-Star (A-Tier)"),
    ("Jack", "All-Star (A-Tier)"),
    ("Katakuri", "Sweet Commander (A-Tier)"),
    ("Smoothie", "Sweet Commander (A-Tier)"),
    ("Cracker", "Sweet Commander (A-Tier)"),
    ("Crocodile", "Warlord (A-Tier)"),
    ("Doflamingo", "Warlord (A-Tier)"),
    ("Kuma", "Warlord (A-Tier)"),
    ("Moria", "Warlord (A-Tier)"),
    ("Jinbe", "Warlord (A-Tier)"),
    ("Rob Lucci", "CP9 Agent (A-Tier)"),
    ("Kaku", "CP9 Agent (A-Tier)"),
    ("Jabra", "CP9 Agent (A-Tier)"),
    ("Magellan", "Prison Warden (A-Tier)"),
    ("Shiryu", "Blackbeard Commander (A-Tier)"),
    ("Ivankov", "Revolutionary Commander (A-Tier)"),
    ("Vergo", "Donquixote Executive (A-Tier)"),
    // B-Tier (Crew Members/Mid-level fighters)
    ("Smoker", "Vice Admiral (B-Tier)"),
    ("Tashigi", "Captain (B-Tier)"),
    ("Coby", "Captain (B-Tier)"),
    ("Buggy", "Warlord (B-Tier)"),
    ("Nami", "Navigator (B-Tier)"),
    ("Usopp", "Sniper (B-Tier)"),
    ("Chopper", "Doctor (B-Tier)"),
    ("Robin", "Scholar (B-Tier)"),
    ("Franky", "Shipwright (B-Tier)"),
    ("Brook", "Musician (B-Tier)"),
    ("Inazuma", "Revolutionary (B-Tier)"),
    ("Koala", "Revolutionary (B-Tier)"),
    ("Spandam", "CP9 Director (B-Tier)"),
    ("Stussy", "CP0 Agent (B-Tier)"),
    ("Caesar Clown", "Scientist (B-Tier)"),
    ("Perona", "Thriller Bark Officer (B-Tier)"),
    ("Hody Jones", "Fishman Captain (B-Tier)"),
    ("Pekoms", "Big Mom Officer (B-Tier)"),
    ("Tamago", "Big Mom Officer (B-Tier)"),
    ("Pell", "Alabasta Guard (B-Tier)"),
    ("Mr 3", "Baroque Works (B-Tier)"),
    ("Mr 2 Bon Clay", "Baroque Works (B-Tier)"),
    ("Hachi", "Fishman (B-Tier)"),
    ("Kuroobi", "Fishman (B-Tier)"),
    ("Wapol", "Former King (B-Tier)"),
    ("Alvida", "Pirate Captain (B-Tier)"),
    ("Bellamy", "Pirate Captain (B-Tier)"),
    ("Foxy", "Pirate Captain (B-Tier)"),
    ("Kaya", "Civilian (B-Tier)"),
    ("Helmeppo", "Marine Captain (B-Tier)"),
    ("Coby Junior", "Marine (B-Tier)"),
    ("Johnny", "Bounty Hunter (B-Tier)"),
    ("Yosaku", "Bounty Hunter (B-Tier)"),
];

/// Returns the stock character pool used when no custom pool is supplied.
///
/// Every card in the pool is unique; the deck invariant "no card appears
/// twice in one game" follows from dealing out of this pool.
pub fn character_pool() -> Vec<Card> {
    POOL.iter().map(|(name, rank)| Card::new(*name, *rank)).collect()
}
