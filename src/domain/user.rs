use rust_decimal::Decimal;

pub type UserId = u64;

/// A registered storefront customer.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: UserId,
    pub email: String,
    /// Stored as entered; this tool does no hashing.
    pub password: String,
    pub username: String,
    pub wallet_balance: Decimal,
}

/// Payload for creating a new user.
#[derive(Debug, Clone)]
pub struct UserCreate {
    pub email: String,
    pub password: String,
    pub username: String,
    pub wallet_balance: Decimal,
}

/// Payload for updating an existing user.
#[derive(Debug, Clone, Default)]
pub struct UserPatch {
    pub wallet_balance: Option<Decimal>,
}

impl UserCreate {
    pub fn new(
        email: impl Into<String>,
        password: impl Into<String>,
        username: impl Into<String>,
        wallet_balance: Decimal,
    ) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            username: username.into(),
            wallet_balance,
        }
    }
}
