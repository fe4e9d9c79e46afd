//! Target community selection.

use rand::Rng;

/// Blogging communities eligible for crossposting, beyond the home
/// community. The first three compete for one slot, the next two for
/// another, and the last two for the final slot.
pub const COMMUNITY_POOL: [&str; 7] = [
    "Blogging",
    "BlogExchange",
    "Bloggers",
    "BloggersCommunity",
    "bloggersandreaders",
    "blogger",
    "blogs",
];

/// Select the four crosspost targets for a run.
///
/// The home community always leads. The remaining three slots are drawn
/// from fixed segments of [`COMMUNITY_POOL`], biased toward the later
/// entry of each two-way segment.
pub fn select_targets(home: &str, rng: &mut impl Rng) -> Vec<String> {
    vec![
        home.to_string(),
        COMMUNITY_POOL[rng.gen_range(0..3)].to_string(),
        COMMUNITY_POOL[if rng.gen_range(0..3) > 1 { 3 } else { 4 }].to_string(),
        COMMUNITY_POOL[if rng.gen_range(0..3) > 1 { 5 } else { 6 }].to_string(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn selects_four_targets_led_by_home() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let targets = select_targets("ExampleBlog", &mut rng);
            assert_eq!(targets.len(), 4);
            assert_eq!(targets[0], "ExampleBlog");
        }
    }

    #[test]
    fn slots_draw_from_their_segments() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let targets = select_targets("ExampleBlog", &mut rng);
            assert!(COMMUNITY_POOL[..3].contains(&targets[1].as_str()));
            assert!(COMMUNITY_POOL[3..5].contains(&targets[2].as_str()));
            assert!(COMMUNITY_POOL[5..].contains(&targets[3].as_str()));
        }
    }
}
