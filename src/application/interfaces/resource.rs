/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/10/26
******************************************************************************/
use crate::constants::{MSG_CREATED, MSG_DELETED, MSG_UPDATED};
use crate::error::AppError;
use chrono::{Local, NaiveDate};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::cmp::Ordering;
use std::marker::PhantomData;

/// Success messages reported by create, update and delete
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrudMessages {
    /// Message for a created record
    pub created: String,
    /// Message for an updated record
    pub updated: String,
    /// Message for a deleted record
    pub deleted: String,
}

impl Default for CrudMessages {
    fn default() -> Self {
        Self {
            created: MSG_CREATED.to_string(),
            updated: MSG_UPDATED.to_string(),
            deleted: MSG_DELETED.to_string(),
        }
    }
}

impl CrudMessages {
    /// Builds a message set
    #[must_use]
    pub fn new(created: &str, updated: &str, deleted: &str) -> Self {
        Self {
            created: created.to_string(),
            updated: updated.to_string(),
            deleted: deleted.to_string(),
        }
    }
}

/// Describes one REST collection to [`crate::application::services::crud::CrudService`]
///
/// The service owns the request skeleton; the adapter decides where the
/// collection lives, how raw records become `Item`s, what payloads look like
/// and which messages are reported.
pub trait ResourceAdapter: Send + Sync {
    /// Record handed to callers
    type Item: Send;
    /// Creation input
    type Create: Serialize + Sync;
    /// Update input
    type Update: Serialize + Sync;

    /// Collection path relative to the base URL, e.g. `/ninos`
    fn endpoint(&self) -> &str;

    /// Turns one raw backend record into an `Item`
    fn transform_item(&self, raw: Value) -> Result<Self::Item, AppError>;

    /// Turns a raw list into `Item`s
    ///
    /// Accepts a bare array, a `{ "data": [...] }` wrapper or an empty body.
    fn transform_list(&self, raw: Value) -> Result<Vec<Self::Item>, AppError> {
        let items = list_items(self.endpoint(), raw)?;
        items
            .into_iter()
            .map(|item| self.transform_item(item))
            .collect()
    }

    /// Body sent by `create`
    fn prepare_create_payload(&self, data: &Self::Create) -> Result<Value, AppError> {
        Ok(serde_json::to_value(data)?)
    }

    /// Body sent by `update`
    fn prepare_update_payload(&self, data: &Self::Update) -> Result<Value, AppError> {
        Ok(serde_json::to_value(data)?)
    }

    /// Success messages
    fn messages(&self) -> CrudMessages {
        CrudMessages::default()
    }
}

/// Backend record decodable from JSON, with optional display fields computed locally
pub trait Record: DeserializeOwned + Send {
    /// Computes derived fields; `today` anchors date dependent values
    fn fill_derived(&mut self, _today: NaiveDate) {}
}

/// Extracts the elements of a list response
///
/// Accepts a bare array, a `{ "data": [...] }` wrapper or an empty body.
///
/// # Errors
/// Returns [`AppError::UnexpectedResponse`] for any other shape.
pub fn list_items(endpoint: &str, raw: Value) -> Result<Vec<Value>, AppError> {
    match raw {
        Value::Array(items) => Ok(items),
        Value::Null => Ok(Vec::new()),
        Value::Object(mut map) => match map.remove("data") {
            Some(Value::Array(items)) => Ok(items),
            _ => Err(AppError::UnexpectedResponse(format!(
                "{endpoint}: expected a list"
            ))),
        },
        _ => Err(AppError::UnexpectedResponse(format!(
            "{endpoint}: expected a list"
        ))),
    }
}

/// Unwraps a `{ "data": {...} }` wrapper around a single record
///
/// Objects that carry their own `id` are returned unchanged.
#[must_use]
pub fn unwrap_data(raw: Value) -> Value {
    match raw {
        Value::Object(mut map) if !map.contains_key("id") && map.contains_key("data") => {
            map.remove("data").unwrap_or(Value::Null)
        }
        other => other,
    }
}

/// Configurable adapter for collections of [`Record`]s
///
/// `R` is the record, `C` the creation input and `U` the update input.
pub struct RecordAdapter<R, C, U> {
    endpoint: String,
    messages: CrudMessages,
    order: Option<fn(&R, &R) -> Ordering>,
    today: fn() -> NaiveDate,
    _marker: PhantomData<fn() -> (R, C, U)>,
}

impl<R, C, U> RecordAdapter<R, C, U> {
    /// Adapter for the collection at `endpoint` with default messages
    #[must_use]
    pub fn new(endpoint: &str) -> Self {
        Self {
            endpoint: endpoint.to_string(),
            messages: CrudMessages::default(),
            order: None,
            today: local_today,
            _marker: PhantomData,
        }
    }

    /// Replaces the success messages
    #[must_use]
    pub fn with_messages(mut self, messages: CrudMessages) -> Self {
        self.messages = messages;
        self
    }

    /// Sorts lists with `order`
    #[must_use]
    pub fn with_order(mut self, order: fn(&R, &R) -> Ordering) -> Self {
        self.order = Some(order);
        self
    }

    /// Replaces the clock used for derived fields
    #[must_use]
    pub fn with_clock(mut self, today: fn() -> NaiveDate) -> Self {
        self.today = today;
        self
    }
}

fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

impl<R, C, U> ResourceAdapter for RecordAdapter<R, C, U>
where
    R: Record,
    C: Serialize + Sync,
    U: Serialize + Sync,
{
    type Item = R;
    type Create = C;
    type Update = U;

    fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn transform_item(&self, raw: Value) -> Result<R, AppError> {
        let mut record: R = serde_json::from_value(unwrap_data(raw))?;
        record.fill_derived((self.today)());
        Ok(record)
    }

    fn transform_list(&self, raw: Value) -> Result<Vec<R>, AppError> {
        let items = list_items(&self.endpoint, raw)?;
        let mut records = items
            .into_iter()
            .map(|item| self.transform_item(item))
            .collect::<Result<Vec<R>, AppError>>()?;
        if let Some(order) = self.order {
            records.sort_by(order);
        }
        Ok(records)
    }

    fn messages(&self) -> CrudMessages {
        self.messages.clone()
    }
}
