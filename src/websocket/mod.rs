//! WebSocket Dashboard Sessions
//!
//! Each connection to `/ws` owns one [`DashboardSession`](crate::dashboard::DashboardSession).
//! Every slider event is answered with a full recomputed view.
//!
//! ## Architecture
//!
//! - **SessionHub**: Tracks live sessions and enforces the session limit
//! - **Handler**: Handles WebSocket upgrade and message processing
//! - **Messages**: Defines client and server message formats
//!
//! ## Example
//!
//! ```javascript
//! // Browser
//! const ws = new WebSocket('ws://127.0.0.1:8050/ws');
//!
//! ws.onmessage = (event) => {
//!   const msg = JSON.parse(event.data);
//!   if (msg.type === 'connected' || msg.type === 'update') render(msg.view);
//! };
//!
//! slider.oninput = () => ws.send(JSON.stringify({
//!   type: 'set_importance', task: 0, value: Number(slider.value),
//! }));
//! ```

mod handler;
mod hub;
mod messages;

pub use handler::websocket_handler;
pub use hub::{HubConfig, HubError, SessionHub, SessionId};
pub use messages::{ClientMessage, ServerMessage};
