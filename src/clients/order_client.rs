use tracing::{error, info, instrument, warn};

use crate::actor_framework::ResourceClient;
use crate::clients::{CartClient, UserClient};
use crate::domain::{Order, OrderCreate, UserId};
use crate::order_actor::OrderError;

/// Client for interacting with the Order actor.
///
/// Placing an order coordinates the cart, user and order stores.
#[derive(Clone)]
pub struct OrderClient {
    inner: ResourceClient<Order>,
    user_client: UserClient,
    cart_client: CartClient,
}

impl OrderClient {
    pub fn new(inner: ResourceClient<Order>, user_client: UserClient, cart_client: CartClient) -> Self {
        Self {
            inner,
            user_client,
            cart_client,
        }
    }

    /// Turns the user's cart into an order and charges their wallet.
    ///
    /// # Errors
    /// - `CartEmpty` if there is nothing to buy
    /// - `UserNotFound` if the user does not exist
    /// - `TotalOverflow` if the prices do not sum to a representable amount
    /// - `InsufficientFunds` if the wallet cannot cover the total
    ///
    /// In every error case the wallet, the cart and the order list are left as they were.
    #[instrument(skip(self))]
    pub async fn place_order(&self, user_id: UserId) -> Result<Order, OrderError> {
        info!("Processing place_order request");

        // Step 1: Read the cart
        let cart = self.cart_client.get_cart(user_id).await?;
        if cart.is_empty() {
            warn!("Cart is empty");
            return Err(OrderError::CartEmpty(user_id));
        }

        // Step 2: Price it
        let Some(total) = cart.total() else {
            warn!(items = cart.games.len(), "Cart total overflows");
            return Err(OrderError::TotalOverflow(user_id));
        };
        info!(items = cart.games.len(), total = %total, "Cart priced");

        // Step 3: Validate user
        match self.user_client.get_user(user_id).await {
            Ok(user) => info!(username = %user.username, "User validation successful"),
            Err(e) => {
                error!(error = %e, "User validation failed");
                return Err(e.into());
            }
        }

        // Step 4: Charge the wallet
        let balance = self.user_client.debit_wallet(user_id, total).await.map_err(|e| {
            error!(error = %e, "Wallet debit failed");
            OrderError::from(e)
        })?;
        info!(balance = %balance, "Wallet debited");

        // Step 5: Record the order, refunding if that fails
        let payload = OrderCreate {
            user_id,
            games: cart.games,
            total_amount: total,
        };
        let order_id = match self.inner.create(payload).await {
            Ok(id) => id,
            Err(e) => {
                error!(error = %e, "Order creation failed, refunding wallet");
                if let Err(refund) = self.user_client.credit_wallet(user_id, total).await {
                    error!(error = %refund, "Refund failed");
                }
                return Err(e);
            }
        };

        // Step 6: Empty the cart
        self.cart_client.clear_cart(user_id).await?;

        let order = self.get_order(order_id).await?;
        info!(order_id, "Order placed successfully");
        Ok(order)
    }

    #[instrument(skip(self))]
    pub async fn list_orders_for_user(&self, user_id: UserId) -> Result<Vec<Order>, OrderError> {
        let mut orders = self.list_orders().await?;
        orders.retain(|order| order.user_id == user_id);
        Ok(orders)
    }
}

impl_client_methods!(OrderClient, Order, OrderError, order);
