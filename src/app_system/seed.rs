use rust_decimal::Decimal;
use tracing::{info, instrument};

use crate::domain::{GameCreate, TransactionCreate, UserCreate};
use super::error::SeedError;
use super::vault_system::VaultSystem;

/// Load the demo storefront: two users, four games and one logged purchase.
#[instrument(skip(system))]
pub async fn seed_demo_data(system: &VaultSystem) -> Result<(), SeedError> {
    let sasuke = system
        .user_client
        .create_user(UserCreate::new("sasuke@gmail.com", "is this my password?", "Sasuke", Decimal::new(50, 0)))
        .await?;
    system
        .user_client
        .create_user(UserCreate::new("naruto@gmail.com", "believeit", "Naruto", Decimal::new(100, 0)))
        .await?;

    let games = [
        GameCreate::new(
            "Spider-Man Remastered",
            "Game created ?? lol lorem ipsum or wot",
            "Insomniac Games",
            "PC",
            Decimal::new(523, 1),
        ),
        GameCreate::new("God of War", "A great game", "Santa Monica Studio", "PS4", Decimal::new(4999, 2)),
        GameCreate::new(
            "The Last of Us Part II",
            "A controversial masterpiece",
            "Naughty Dog",
            "PS4",
            Decimal::new(5999, 2),
        ),
        GameCreate::new("Cyberpunk 2077", "A buggy mess... or is it?", "CD Projekt Red", "PC", Decimal::new(3999, 2)),
    ];
    let mut game_ids = Vec::with_capacity(games.len());
    for game in games {
        game_ids.push(system.game_client.create_game(game).await?);
    }

    // A purchase logged by hand; seeding does not place an order for it
    if let Some(&spider_man) = game_ids.first() {
        system
            .transaction_client
            .add_transaction(TransactionCreate::new(sasuke, spider_man, "Purchase", Decimal::new(523, 1)))
            .await?;
    }

    info!(users = 2, games = game_ids.len(), "Demo data loaded");
    Ok(())
}
