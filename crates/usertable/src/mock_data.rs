use usertable_core::user::User;

/// Demo users for the in-memory backend.
///
/// Three organizations with a few active members each, plus outstanding
/// invitations. `abc123` is the code used in the README walkthrough.
pub fn demo_users() -> Vec<User> {
    vec![
        User::new("u-1001", "org-acme", "Ada", "Lovelace", 5_550_100),
        User::new("u-1002", "org-acme", "Charles", "Babbage", 5_550_101)
            .with_membership_expired(false),
        User::new("u-1003", "org-acme", "Grace", "Hopper", 5_550_102)
            .with_membership_expired(true),
        User::new("u-2001", "org-globex", "Alan", "Turing", 5_550_200),
        User::new("u-2002", "org-globex", "Barbara", "Liskov", 5_550_201),
        User::new("u-3001", "org-initech", "Edsger", "Dijkstra", 5_550_300),
        User::pending("abc123", "org-acme", "Margaret", "Hamilton", 5_550_103),
        User::pending("k7q2zx", "org-globex", "Donald", "Knuth", 5_550_202),
        User::pending("m4p9wd", "org-initech", "Frances", "Allen", 5_550_301),
    ]
}
