use users_info_sdk::{User, UserId};

/// Read access to the user directory.
pub trait UsersRepository: Send + Sync {
    fn all(&self) -> Vec<User>;

    fn find(&self, id: UserId) -> Option<User>;
}

struct Fixture {
    id: UserId,
    name: &'static str,
    email: &'static str,
}

const DIRECTORY: [Fixture; 2] = [
    Fixture {
        id: 1,
        name: "John Doe",
        email: "john@example.com",
    },
    Fixture {
        id: 2,
        name: "Jane Smith",
        email: "jane@example.com",
    },
];

impl Fixture {
    fn to_user(&self) -> User {
        User {
            id: self.id,
            name: self.name.to_owned(),
            email: self.email.to_owned(),
        }
    }
}

/// The built-in directory of demo users.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticUsersRepository;

impl UsersRepository for StaticUsersRepository {
    fn all(&self) -> Vec<User> {
        DIRECTORY.iter().map(Fixture::to_user).collect()
    }

    fn find(&self, id: UserId) -> Option<User> {
        DIRECTORY.iter().find(|f| f.id == id).map(Fixture::to_user)
    }
}
