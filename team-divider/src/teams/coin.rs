use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Fair binary choice used to decide each position independently
pub trait CoinFlip {
    fn flip(&mut self) -> bool;
}

/// Coin backed by any `rand` generator
#[derive(Debug, Clone)]
pub struct RandomCoin<R: Rng> {
    rng: R,
}

impl<R: Rng> RandomCoin<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomCoin<StdRng> {
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }

    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> CoinFlip for RandomCoin<R> {
    fn flip(&mut self) -> bool {
        self.rng.gen_bool(0.5)
    }
}

/// Replays a fixed sequence of outcomes, cycling when it runs out
#[cfg(test)]
#[derive(Debug, Clone)]
pub struct ScriptedCoin {
    outcomes: Vec<bool>,
    next: usize,
}

#[cfg(test)]
impl ScriptedCoin {
    pub fn new(outcomes: Vec<bool>) -> Self {
        Self { outcomes, next: 0 }
    }
}

#[cfg(test)]
impl CoinFlip for ScriptedCoin {
    fn flip(&mut self) -> bool {
        let outcome = self.outcomes[self.next % self.outcomes.len()];
        self.next += 1;
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_coin_is_reproducible() {
        let mut a = RandomCoin::seeded(7);
        let mut b = RandomCoin::seeded(7);
        let first: Vec<bool> = (0..32).map(|_| a.flip()).collect();
        let second: Vec<bool> = (0..32).map(|_| b.flip()).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_random_coin_lands_both_ways() {
        let mut coin = RandomCoin::seeded(42);
        let heads = (0..10_000).filter(|_| coin.flip()).count();
        assert!(heads > 4_500 && heads < 5_500, "heads = {}", heads);
    }

    #[test]
    fn test_scripted_coin_cycles() {
        let mut coin = ScriptedCoin::new(vec![true, false]);
        assert!(coin.flip());
        assert!(!coin.flip());
        assert!(coin.flip());
    }
}
