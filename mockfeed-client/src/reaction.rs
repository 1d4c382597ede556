use crate::api::{ReactionKind, Reactions, UserId};

pub trait ReactionsExt {
    /// Toggle `user`'s `kind` reaction, returning the kind the user holds afterwards
    fn toggle(&mut self, user: &UserId, kind: ReactionKind) -> Option<ReactionKind>;

    /// Whether every count matches the number of users holding that kind
    fn is_consistent(&self) -> bool;
}

impl ReactionsExt for Reactions {
    fn toggle(&mut self, user: &UserId, kind: ReactionKind) -> Option<ReactionKind> {
        match self.of(user) {
            Some(held) if held == kind => {
                let count = self.counts.get_mut(kind);
                *count = count.saturating_sub(1);
                self.by_user.remove(user);
                None
            }
            held => {
                if let Some(held) = held {
                    let count = self.counts.get_mut(held);
                    *count = count.saturating_sub(1);
                }
                *self.counts.get_mut(kind) += 1;
                self.by_user.insert(user.clone(), kind);
                Some(kind)
            }
        }
    }

    fn is_consistent(&self) -> bool {
        ReactionKind::ALL.iter().all(|k| {
            let holders = self.by_user.values().filter(|held| **held == *k).count();
            self.counts.get(*k) == holders as u64
        })
    }
}
