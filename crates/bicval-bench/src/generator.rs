//! Seeded BIC candidate generator.
//!
//! Valid candidates are built segment by segment. Invalid ones start from a
//! valid BIC and have one [`Mutation`] applied, each of which is guaranteed
//! to break the ISO 9362 structure.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const LETTERS: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const ALPHANUM: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
const DIGITS: &[u8] = b"0123456789";
const PUNCTUATION: &[u8] = b"-_ ./#";
const COUNTRIES: &[&str] = &["DE", "FR", "GB", "US", "NL", "CH", "JP", "XK", "BE", "IT"];

/// Configuration for [`generate_candidates`].
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Seed for the random number generator (deterministic).
    pub seed: u64,
    /// Number of candidates to produce.
    pub count: usize,
    /// Fraction of candidates that are structurally invalid (0.0-1.0).
    pub invalid_ratio: f64,
    /// Fraction of valid candidates that carry a branch code (0.0-1.0).
    pub branch_ratio: f64,
}

/// Predefined batch sizes for benchmarking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatchSize {
    /// 100 candidates
    Small,
    /// 10 000 candidates
    Medium,
    /// 100 000 candidates
    Large,
}

impl BatchSize {
    /// Returns the default `GeneratorConfig` for this batch size.
    pub fn config(self, seed: u64) -> GeneratorConfig {
        let count = match self {
            BatchSize::Small => 100,
            BatchSize::Medium => 10_000,
            BatchSize::Large => 100_000,
        };
        GeneratorConfig {
            seed,
            count,
            invalid_ratio: 0.2,
            branch_ratio: 0.5,
        }
    }
}

/// Ways of breaking a valid BIC.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mutation {
    /// Length other than 8 or 11.
    WrongLength,
    /// A digit somewhere in the first six characters.
    DigitInLetters,
    /// A punctuation character or space at a random position.
    Punctuation,
    /// A non-ASCII letter at a random position.
    NonAscii,
}

const MUTATIONS: [Mutation; 4] = [
    Mutation::WrongLength,
    Mutation::DigitInLetters,
    Mutation::Punctuation,
    Mutation::NonAscii,
];

/// A generated candidate and whether it should pass the structure check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// The candidate text.
    pub value: String,
    /// `None` for a valid candidate, otherwise the mutation applied.
    pub mutation: Option<Mutation>,
}

impl Candidate {
    /// Returns `true` if the candidate was generated as a valid BIC.
    pub fn expect_valid(&self) -> bool {
        self.mutation.is_none()
    }
}

/// Generates `config.count` candidates deterministically from `config.seed`.
pub fn generate_candidates(config: &GeneratorConfig) -> Vec<Candidate> {
    let mut rng = StdRng::seed_from_u64(config.seed);
    (0..config.count)
        .map(|_| {
            let valid = gen_bic(&mut rng, config.branch_ratio);
            if rng.gen_bool(config.invalid_ratio) {
                let mutation = MUTATIONS[rng.gen_range(0..MUTATIONS.len())];
                Candidate {
                    value: mutate(&mut rng, &valid, mutation),
                    mutation: Some(mutation),
                }
            } else {
                Candidate {
                    value: valid,
                    mutation: None,
                }
            }
        })
        .collect()
}

/// Generates a structurally valid BIC, upper case.
pub fn gen_bic(rng: &mut StdRng, branch_ratio: f64) -> String {
    let mut bic = pick_n(rng, LETTERS, 4);
    bic.push_str(COUNTRIES[rng.gen_range(0..COUNTRIES.len())]);
    bic.push_str(&pick_n(rng, ALPHANUM, 2));
    if rng.gen_bool(branch_ratio) {
        bic.push_str(&pick_n(rng, ALPHANUM, 3));
    }
    bic
}

fn mutate(rng: &mut StdRng, valid: &str, mutation: Mutation) -> String {
    let mut chars: Vec<char> = valid.chars().collect();
    match mutation {
        Mutation::WrongLength => {
            let len = [0, 1, 4, 6, 7, 9, 10, 12, 16][rng.gen_range(0..9)];
            chars.resize(len, 'X');
        }
        Mutation::DigitInLetters => {
            let at = rng.gen_range(0..6);
            chars[at] = pick(rng, DIGITS);
        }
        Mutation::Punctuation => {
            let at = rng.gen_range(0..chars.len());
            chars[at] = pick(rng, PUNCTUATION);
        }
        Mutation::NonAscii => {
            let at = rng.gen_range(0..chars.len());
            chars[at] = ['Ä', 'É', 'Ø', 'ß'][rng.gen_range(0..4)];
        }
    }
    chars.into_iter().collect()
}

fn pick(rng: &mut StdRng, alphabet: &[u8]) -> char {
    alphabet[rng.gen_range(0..alphabet.len())] as char
}

fn pick_n(rng: &mut StdRng, alphabet: &[u8], n: usize) -> String {
    (0..n).map(|_| pick(rng, alphabet)).collect()
}
