//! Bidirectional friendship graphs with randomized population and
//! single-source shortest paths over the extended network.
//!
//! Friendships are symmetric by construction: one [`SocialNetwork::add_friendship`]
//! call writes both directions, so `b ∈ friends(a)` iff `a ∈ friends(b)` at
//! all times.  Rejected self- and duplicate friendships are soft warnings
//! (logged, call succeeds without effect), not errors.

use std::collections::{HashMap, HashSet};

use rand::seq::SliceRandom;
use rand::Rng;
use roaring::RoaringBitmap;
use tracing::warn;

use crate::digraph::GraphError;
use crate::frontier::Queue;

/// User identifiers are assigned sequentially starting at 1.
pub type UserId = u32;

/// A member of the network.  Carries only a display name; all graph
/// structure lives in the friendship mapping keyed by [`UserId`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct User {
    pub name: String,
}

#[derive(Clone, Debug, Default)]
pub struct SocialNetwork {
    last_id: UserId,
    users: HashMap<UserId, User>,
    friendships: HashMap<UserId, HashSet<UserId>>,
}

impl SocialNetwork {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new user with the next sequential ID and an empty friend
    /// set, and returns the assigned ID.
    pub fn add_user(&mut self, name: impl Into<String>) -> UserId {
        self.last_id += 1;
        self.users.insert(self.last_id, User { name: name.into() });
        self.friendships.insert(self.last_id, HashSet::new());
        self.last_id
    }

    /// Creates a bidirectional friendship between `user_id` and `friend_id`.
    ///
    /// Returns `Ok(true)` when the friendship was created, `Ok(false)` (with
    /// a warning logged) when it was rejected as a self-friendship or a
    /// duplicate, and [`GraphError::UnknownVertex`] when either user does
    /// not exist.
    pub fn add_friendship(
        &mut self,
        user_id: UserId,
        friend_id: UserId,
    ) -> Result<bool, GraphError<UserId>> {
        if !self.friendships.contains_key(&user_id) {
            return Err(GraphError::UnknownVertex(user_id));
        }
        if !self.friendships.contains_key(&friend_id) {
            return Err(GraphError::UnknownVertex(friend_id));
        }
        if user_id == friend_id {
            warn!(user_id, "you cannot be friends with yourself");
            return Ok(false);
        }
        if self.friendships[&user_id].contains(&friend_id)
            || self.friendships[&friend_id].contains(&user_id)
        {
            warn!(user_id, friend_id, "friendship already exists");
            return Ok(false);
        }
        // Both directions as one logical operation.
        self.friendships.entry(user_id).or_default().insert(friend_id);
        self.friendships.entry(friend_id).or_default().insert(user_id);
        Ok(true)
    }

    pub fn user(&self, user_id: UserId) -> Option<&User> {
        self.users.get(&user_id)
    }

    pub fn user_count(&self) -> usize {
        self.users.len()
    }

    /// Returns the friend set of `user_id`.
    pub fn friends_of(&self, user_id: UserId) -> Result<&HashSet<UserId>, GraphError<UserId>> {
        self.friendships
            .get(&user_id)
            .ok_or(GraphError::UnknownVertex(user_id))
    }

    /// Number of friendships in the network.  Each bidirectional friendship
    /// counts once.
    pub fn friendship_count(&self) -> usize {
        self.friendships.values().map(HashSet::len).sum::<usize>() / 2
    }

    /// Discards all existing state, creates `num_users` fresh users and
    /// wires up `num_users * avg_friendships / 2` (integer division)
    /// friendships chosen uniformly at random from all unordered user
    /// pairs.
    ///
    /// The random source is injected so callers can seed it for
    /// reproducible networks.  Precondition (not enforced): `num_users`
    /// must exceed `avg_friendships`, otherwise there are not enough
    /// distinct pairs to go around.
    pub fn populate<R: Rng + ?Sized>(
        &mut self,
        num_users: u32,
        avg_friendships: u32,
        rng: &mut R,
    ) -> Result<(), GraphError<UserId>> {
        self.last_id = 0;
        self.users.clear();
        self.friendships.clear();

        for i in 0..num_users {
            self.add_user(format!("User {i}"));
        }

        // All unordered candidate pairs, first ID smaller than the second.
        let mut possible_friendships: Vec<(UserId, UserId)> = Vec::new();
        for user_id in 1..=num_users {
            for friend_id in user_id + 1..=num_users {
                possible_friendships.push((user_id, friend_id));
            }
        }
        possible_friendships.shuffle(rng);

        // Each committed pair creates two directed entries, hence the
        // division by two.
        let target = (num_users as usize * avg_friendships as usize) / 2;
        for &(user_id, friend_id) in possible_friendships.iter().take(target) {
            self.add_friendship(user_id, friend_id)?;
        }
        Ok(())
    }

    /// Breadth-first search from `user_id` over the friendship mapping,
    /// returning the shortest path from `user_id` to every user in their
    /// extended network, keyed by the reached user's ID.
    ///
    /// The entry for `user_id` itself is always the single-vertex path
    /// `[user_id]`.  Every frontier entry owns an independent copy of its
    /// path; branches never share a buffer.
    pub fn all_social_paths(
        &self,
        user_id: UserId,
    ) -> Result<HashMap<UserId, Vec<UserId>>, GraphError<UserId>> {
        if !self.friendships.contains_key(&user_id) {
            return Err(GraphError::UnknownVertex(user_id));
        }

        let mut visited: RoaringBitmap = RoaringBitmap::new();
        let mut shortest: HashMap<UserId, Vec<UserId>> = HashMap::new();
        let mut paths: Queue<Vec<UserId>> = Queue::new();
        paths.enqueue(vec![user_id]);

        while let Some(path) = paths.dequeue() {
            let user = *path.last().expect("paths on the frontier are never empty");
            if visited.contains(user) {
                continue;
            }
            visited.insert(user);
            for &friend in &self.friendships[&user] {
                let mut extended = path.clone();
                extended.push(friend);
                paths.enqueue(extended);
            }
            shortest.insert(user, path);
        }

        Ok(shortest)
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    /// The ten-user network from the exercise sheet.
    fn sample_network() -> SocialNetwork {
        let mut network = SocialNetwork::new();
        for i in 1..=10 {
            network.add_user(format!("User {i}"));
        }
        for (a, b) in [
            (1, 8),
            (1, 10),
            (1, 5),
            (2, 10),
            (2, 5),
            (2, 7),
            (3, 4),
            (4, 9),
            (5, 8),
            (6, 10),
        ] {
            assert!(network.add_friendship(a, b).unwrap());
        }
        network
    }

    #[test]
    fn ids_are_sequential_from_one() {
        let mut network = SocialNetwork::new();
        assert_eq!(network.add_user("a"), 1);
        assert_eq!(network.add_user("b"), 2);
        assert_eq!(network.add_user("c"), 3);
        assert_eq!(network.user(2).unwrap().name, "b");
    }

    #[test]
    fn self_friendship_is_a_no_op() {
        let mut network = SocialNetwork::new();
        network.add_user("a");
        assert_eq!(network.add_friendship(1, 1), Ok(false));
        assert!(network.friends_of(1).unwrap().is_empty());
    }

    #[test]
    fn duplicate_friendship_is_a_no_op_in_either_direction() {
        let mut network = SocialNetwork::new();
        network.add_user("a");
        network.add_user("b");
        assert_eq!(network.add_friendship(1, 2), Ok(true));
        assert_eq!(network.add_friendship(1, 2), Ok(false));
        assert_eq!(network.add_friendship(2, 1), Ok(false));
        assert_eq!(network.friendship_count(), 1);
    }

    #[test]
    fn friendships_are_symmetric() {
        let network = sample_network();
        for (&user, friends) in &network.friendships {
            for &friend in friends {
                assert!(
                    network.friends_of(friend).unwrap().contains(&user),
                    "{friend} is a friend of {user} but not vice versa"
                );
            }
        }
    }

    #[test]
    fn unknown_users_cannot_be_friended() {
        let mut network = SocialNetwork::new();
        network.add_user("a");
        assert_eq!(
            network.add_friendship(1, 9),
            Err(GraphError::UnknownVertex(9))
        );
        assert_eq!(
            network.add_friendship(9, 1),
            Err(GraphError::UnknownVertex(9))
        );
    }

    #[test]
    fn populate_creates_the_requested_users_and_friendships() {
        let mut network = SocialNetwork::new();
        let mut rng = StdRng::seed_from_u64(42);
        network.populate(10, 2, &mut rng).unwrap();
        assert_eq!(network.user_count(), 10);
        // 10 * 2 / 2 pairs, all distinct because they were drawn without
        // replacement from the shuffled candidate list.
        assert_eq!(network.friendship_count(), 10);
    }

    #[test]
    fn populate_resets_previous_state() {
        let mut network = sample_network();
        let mut rng = StdRng::seed_from_u64(7);
        network.populate(4, 1, &mut rng).unwrap();
        assert_eq!(network.user_count(), 4);
        assert_eq!(network.friendship_count(), 2);
        assert!(network.user(10).is_none());
    }

    #[test]
    fn populate_is_reproducible_for_a_fixed_seed() {
        let mut first = SocialNetwork::new();
        let mut second = SocialNetwork::new();
        first
            .populate(12, 3, &mut StdRng::seed_from_u64(99))
            .unwrap();
        second
            .populate(12, 3, &mut StdRng::seed_from_u64(99))
            .unwrap();
        assert_eq!(first.friendships, second.friendships);
    }

    #[test]
    fn social_paths_from_the_sample_network() {
        let network = sample_network();
        let paths = network.all_social_paths(1).unwrap();
        // 1's extended network from the exercise sheet; 3, 4 and 9 are in a
        // separate component.
        let mut reachable: Vec<UserId> = paths.keys().copied().collect();
        reachable.sort_unstable();
        assert_eq!(reachable, vec![1, 2, 5, 6, 7, 8, 10]);
        assert_eq!(paths[&1], vec![1]);
        assert_eq!(paths[&8], vec![1, 8]);
        // 7 is three hops out: 1 .. 2 .. 7 via either 5 or 10.
        assert_eq!(paths[&7].len(), 4);
        assert_eq!(paths[&7][0], 1);
        assert_eq!(paths[&7][3], 7);
    }

    #[test]
    fn social_paths_walk_existing_friendships() {
        let network = sample_network();
        for start in 1..=10 {
            let paths = network.all_social_paths(start).unwrap();
            assert_eq!(paths[&start], vec![start]);
            for (goal, path) in &paths {
                assert_eq!(*path.first().unwrap(), start);
                assert_eq!(path.last().unwrap(), goal);
                for hop in path.windows(2) {
                    assert!(network.friends_of(hop[0]).unwrap().contains(&hop[1]));
                }
            }
        }
    }

    #[test]
    fn social_paths_for_an_unknown_user_fail() {
        let network = sample_network();
        assert_eq!(
            network.all_social_paths(42),
            Err(GraphError::UnknownVertex(42))
        );
    }

    #[test]
    fn populated_network_keeps_the_symmetry_invariant() {
        let mut network = SocialNetwork::new();
        for seed in 0..8 {
            let mut rng = StdRng::seed_from_u64(seed);
            network.populate(20, 3, &mut rng).unwrap();
            assert_eq!(network.friendship_count(), 30);
            for (&user, friends) in &network.friendships {
                assert!(!friends.contains(&user));
                for &friend in friends {
                    assert!(network.friendships[&friend].contains(&user));
                }
            }
        }
    }
}
