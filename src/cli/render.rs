//! Table rendering for list results.

use rust_decimal::Decimal;
use tabled::builder::Builder;
use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Style};

use crate::domain::{Game, Order, Transaction, User};

const EMPTY: &str = "(none)";
const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

fn money(amount: Decimal) -> String {
    format!("{amount:.2}")
}

fn render<const N: usize>(header: [&str; N], rows: Vec<Vec<String>>, money_column: usize) -> String {
    if rows.is_empty() {
        return EMPTY.to_string();
    }

    let mut builder = Builder::default();
    builder.push_record(header);
    for row in rows {
        builder.push_record(row);
    }

    let mut table = builder.build();
    table.with(Style::modern_rounded());
    table.modify(Columns::new(money_column..money_column + 1), Alignment::right());
    table.to_string()
}

pub fn games_table(games: &[Game]) -> String {
    let rows = games
        .iter()
        .map(|game| {
            vec![
                game.id.to_string(),
                game.title.clone(),
                game.description.clone(),
                game.developer.clone(),
                game.platform.clone(),
                money(game.price),
                game.added_at.format(DATE_FORMAT).to_string(),
            ]
        })
        .collect();
    render(["ID", "Title", "Description", "Developer", "Platform", "Price", "Added"], rows, 5)
}

pub fn users_table(users: &[User]) -> String {
    let rows = users
        .iter()
        .map(|user| {
            vec![
                user.id.to_string(),
                user.username.clone(),
                user.email.clone(),
                money(user.wallet_balance),
            ]
        })
        .collect();
    render(["ID", "Username", "Email", "Wallet"], rows, 3)
}

pub fn orders_table(orders: &[Order]) -> String {
    let rows = orders
        .iter()
        .map(|order| {
            let titles: Vec<&str> = order.games.iter().map(|game| game.title.as_str()).collect();
            vec![
                order.id.to_string(),
                order.order_date.format(DATE_FORMAT).to_string(),
                titles.join(", "),
                money(order.total_amount),
            ]
        })
        .collect();
    render(["Order", "Date", "Games", "Total"], rows, 3)
}

pub fn transactions_table(transactions: &[Transaction]) -> String {
    let rows = transactions
        .iter()
        .map(|transaction| {
            vec![
                transaction.id.to_string(),
                transaction.kind.clone(),
                transaction.game_id.to_string(),
                money(transaction.amount),
                transaction.created_at.format(DATE_FORMAT).to_string(),
            ]
        })
        .collect();
    render(["Transaction", "Type", "Game", "Amount", "Date"], rows, 3)
}
