//! Tickets sub-client — tickets, messages, transitions, service requests.

use crate::client::AliceClient;
use crate::domain::require_body;
use crate::error::SdkError;
use crate::http::RawResponse;
use serde_json::Value;

pub struct Tickets<'a> {
    pub(crate) client: &'a AliceClient,
}

impl<'a> Tickets<'a> {
    /// Load tickets for the given hotel.
    pub async fn all(&self, hotel_id: i64) -> Result<Value, SdkError> {
        Ok(self.client.http.get_tickets(hotel_id).await?)
    }

    /// Load a single ticket.
    pub async fn get(&self, hotel_id: i64, ticket_id: i64) -> Result<Value, SdkError> {
        Ok(self.client.http.get_ticket(hotel_id, ticket_id).await?)
    }

    /// Update a ticket.
    pub async fn update(
        &self,
        hotel_id: i64,
        ticket_id: i64,
        body: &Value,
    ) -> Result<RawResponse, SdkError> {
        require_body(body)?;
        Ok(self
            .client
            .http
            .update_ticket(hotel_id, ticket_id, body)
            .await?)
    }

    /// Load the message thread on a ticket.
    pub async fn messages(&self, hotel_id: i64, ticket_id: i64) -> Result<Value, SdkError> {
        Ok(self
            .client
            .http
            .get_ticket_messages(hotel_id, ticket_id)
            .await?)
    }

    /// Load the workflow transitions available to a ticket.
    pub async fn transitions(&self, hotel_id: i64, ticket_id: i64) -> Result<Value, SdkError> {
        Ok(self
            .client
            .http
            .get_ticket_transitions(hotel_id, ticket_id)
            .await?)
    }

    /// Update the menu order attached to a ticket.
    pub async fn update_menu_order(
        &self,
        hotel_id: i64,
        ticket_id: i64,
        body: &Value,
    ) -> Result<RawResponse, SdkError> {
        require_body(body)?;
        Ok(self
            .client
            .http
            .update_ticket_menu_order(hotel_id, ticket_id, body)
            .await?)
    }

    /// Update the service request attached to a ticket.
    pub async fn update_service_request(
        &self,
        hotel_id: i64,
        ticket_id: i64,
        body: &Value,
    ) -> Result<RawResponse, SdkError> {
        require_body(body)?;
        Ok(self
            .client
            .http
            .update_ticket_service_request(hotel_id, ticket_id, body)
            .await?)
    }

    /// Move a ticket to another workflow status.
    pub async fn update_workflow_status(
        &self,
        hotel_id: i64,
        ticket_id: i64,
        body: &Value,
    ) -> Result<RawResponse, SdkError> {
        require_body(body)?;
        Ok(self
            .client
            .http
            .update_ticket_workflow_status(hotel_id, ticket_id, body)
            .await?)
    }

    /// Create an offline request ticket.
    pub async fn create_offline_request(
        &self,
        hotel_id: i64,
        body: &Value,
    ) -> Result<RawResponse, SdkError> {
        require_body(body)?;
        Ok(self
            .client
            .http
            .create_offline_request(hotel_id, body)
            .await?)
    }

    /// Create a service request on a ticket.
    pub async fn create_service_request(
        &self,
        hotel_id: i64,
        ticket_id: i64,
        body: &Value,
    ) -> Result<RawResponse, SdkError> {
        require_body(body)?;
        Ok(self
            .client
            .http
            .create_ticket_service_request(hotel_id, ticket_id, body)
            .await?)
    }
}
