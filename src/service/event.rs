use crate::{
    dto::{GetEventVariables, NoVariables},
    errors::AppError,
    gql::{documents::{GetEvent, GetEvents}, ApiClient},
    models::EventView,
};

use super::session::Session;

pub async fn get_all(api: &ApiClient, session: &Session) -> Result<Vec<EventView>, AppError> {
   let res = api.execute::<GetEvents>(session.cookie(), &NoVariables {})
      .await?;
   Ok(res.data.events)
}

/// `event_id` is the raw route segment. Anything outside GraphQL's 32-bit
/// `Int` can never name an event, so it is reported as missing without asking
/// the API.
pub async fn get_by_id(api: &ApiClient, session: &Session, event_id: &str) -> Result<EventView, AppError> {
   let not_found = || AppError::not_found(format!("No event with the ID {event_id}"));
   let id: i32 = event_id.trim().parse().map_err(|_| not_found())?;
   let res = api.execute::<GetEvent>(session.cookie(), &GetEventVariables { event_id: id })
      .await?;
   res.data.event.ok_or_else(not_found)
}
