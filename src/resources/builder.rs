//! Resource builders.
//!
//! A [`Builder`] is a configured accessor for one remote resource type. It
//! assembles [`RequestOptions`] for list, find and write calls, sends them
//! through a [`Transport`] and maps the answers to models.

use std::fmt::Display;
use std::marker::PhantomData;

use serde::{de::DeserializeOwned, Serialize};
use serde_json::{Map, Value};

use crate::clients::{keys, RequestOptions, Transport, OUTPUT_FORMAT_JSON};
use crate::resources::{mapper, Limit, ListQuery, Resource, ResourceError};
use crate::xml::value_to_xml;

/// Root element of XML write payloads.
pub const PAYLOAD_ROOT: &str = "prestashop";

/// Filter field that turns on date-range filtering.
const DATE_FILTER_FIELD: &str = "date_add";

/// Schema name requested by [`Builder::blank`].
const BLANK_SCHEMA: &str = "blank";

/// Accessor for one webservice resource type.
///
/// `M` is the model built from responses and `T` the transport calls go
/// through. Typed resources get their names from [`Resource`]; any other
/// model, such as [`Entity`](crate::resources::models::Entity), is given
/// names explicitly.
///
/// Every call awaits its transport round trip before the next one starts.
///
/// # Example
///
/// ```rust,ignore
/// use prestashop_api::resources::{Builder, ListQuery, Limit};
/// use prestashop_api::resources::models::{Entity, Product};
///
/// let products = Builder::<Product, _>::new(&client);
/// let active = products
///     .get(&ListQuery::new().filter("active", "1").limit(Limit::Count(10)))
///     .await?;
///
/// let carriers = Builder::<Entity, _>::with_names(&client, "carriers", "carrier");
/// let carrier = carriers.find(2).await?;
/// ```
pub struct Builder<'a, M, T> {
    transport: &'a T,
    entity: String,
    details_entity: String,
    node: String,
    primary_key: String,
    model: PhantomData<fn() -> M>,
}

impl<'a, M: Resource, T: Transport> Builder<'a, M, T> {
    /// Creates a builder named after the resource's constants.
    #[must_use]
    pub fn new(transport: &'a T) -> Self {
        Self {
            transport,
            entity: M::ENTITY.to_string(),
            details_entity: M::DETAILS_ENTITY.to_string(),
            node: M::NODE.to_string(),
            primary_key: M::PRIMARY_KEY.to_string(),
            model: PhantomData,
        }
    }
}

impl<'a, M, T: Transport> Builder<'a, M, T> {
    /// Creates a builder with explicit names.
    ///
    /// The details entity defaults to `entity` and the primary key to `id`.
    #[must_use]
    pub fn with_names(transport: &'a T, entity: impl Into<String>, node: impl Into<String>) -> Self {
        let entity = entity.into();
        Self {
            transport,
            details_entity: entity.clone(),
            entity,
            node: node.into(),
            primary_key: "id".to_string(),
            model: PhantomData,
        }
    }

    /// Returns the entity name used for listing and writes.
    #[must_use]
    pub fn entity(&self) -> &str {
        &self.entity
    }

    /// Sets the entity name used for listing and writes.
    pub fn set_entity(&mut self, entity: impl Into<String>) -> &mut Self {
        self.entity = entity.into();
        self
    }

    /// Returns the entity name used by [`find`](Self::find).
    #[must_use]
    pub fn details_entity(&self) -> &str {
        &self.details_entity
    }

    /// Sets the entity name used by [`find`](Self::find).
    pub fn set_details_entity(&mut self, details_entity: impl Into<String>) -> &mut Self {
        self.details_entity = details_entity.into();
        self
    }

    /// Returns the element name of one resource in XML payloads.
    #[must_use]
    pub fn node(&self) -> &str {
        &self.node
    }

    /// Sets the element name of one resource in XML payloads.
    pub fn set_node(&mut self, node: impl Into<String>) -> &mut Self {
        self.node = node.into();
        self
    }

    /// Returns the primary key field.
    #[must_use]
    pub fn primary_key(&self) -> &str {
        &self.primary_key
    }

    /// Sets the primary key field.
    pub fn set_primary_key(&mut self, primary_key: impl Into<String>) -> &mut Self {
        self.primary_key = primary_key.into();
        self
    }

    /// Builds the options of a list call.
    ///
    /// With a URL override the options are `{url, output_format}` and the
    /// URL gains `output_format=JSON` unless it already names an output
    /// format. Otherwise they are `{resource, output_format}` plus the
    /// encoded filters, `date=1` when filtering on `date_add`, and the limit.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::InvalidFilter`] if a filter has an empty
    /// field name.
    pub fn build_list_request(&self, query: &ListQuery) -> Result<RequestOptions, ResourceError> {
        let mut options = RequestOptions::new();

        if let Some(url) = query.get_url() {
            options.insert(keys::URL, with_output_format(url));
            options.insert(keys::OUTPUT_FORMAT, OUTPUT_FORMAT_JSON);
            return Ok(options);
        }

        options.insert(keys::RESOURCE, self.entity.as_str());
        options.insert(keys::OUTPUT_FORMAT, OUTPUT_FORMAT_JSON);

        let filters = query.filters();
        if !filters.is_empty() {
            options.merge(filters.encode()?);
            if filters.contains(DATE_FILTER_FIELD) {
                options.insert(keys::DATE, "1");
            }
        }

        if let Some((key, value)) = Limit::encode(query.get_limit()) {
            options.insert(key, value);
        }

        Ok(options)
    }

    /// Builds the options of a find call.
    #[must_use]
    pub fn build_find_request(&self, id: &str) -> RequestOptions {
        let mut options = RequestOptions::new();
        options.insert(keys::RESOURCE, self.details_entity.as_str());
        options.insert(keys::OUTPUT_FORMAT, OUTPUT_FORMAT_JSON);
        options.insert(self.primary_key.as_str(), id);
        options
    }

    /// Builds the options of a create call.
    #[must_use]
    pub fn build_create_request(&self, xml: impl Into<String>) -> RequestOptions {
        let mut options = RequestOptions::new();
        options.insert(keys::RESOURCE, self.entity.as_str());
        options.insert(keys::POST_XML, xml);
        options
    }

    /// Builds the options of an update call.
    #[must_use]
    pub fn build_update_request(&self, id: &str, xml: impl Into<String>) -> RequestOptions {
        let mut options = RequestOptions::new();
        options.insert(keys::RESOURCE, self.entity.as_str());
        options.insert(self.primary_key.as_str(), id);
        options.insert(keys::PUT_XML, xml);
        options
    }

    /// Builds the options of a delete call.
    #[must_use]
    pub fn build_delete_request(&self, id: &str) -> RequestOptions {
        let mut options = RequestOptions::new();
        options.insert(keys::RESOURCE, self.entity.as_str());
        options.insert(self.primary_key.as_str(), id);
        options
    }

    /// Builds the options fetching the blank schema of the entity.
    #[must_use]
    pub fn build_blank_request(&self) -> RequestOptions {
        let mut options = RequestOptions::new();
        options.insert(keys::RESOURCE, self.entity.as_str());
        options.insert(keys::SCHEMA, BLANK_SCHEMA);
        options.insert(keys::OUTPUT_FORMAT, OUTPUT_FORMAT_JSON);
        options
    }

    /// Deletes a resource.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] on a 404 and
    /// [`ResourceError::Http`] on any other transport failure.
    pub async fn delete(&self, id: impl Display) -> Result<(), ResourceError> {
        let id = id.to_string();
        let options = self.build_delete_request(&id);

        tracing::debug!(entity = %self.entity, id = %id, "Deleting resource");
        self.transport
            .delete(&options)
            .await
            .map_err(|e| ResourceError::from_http(e, &self.entity, &id))
    }
}

impl<'a, M: DeserializeOwned, T: Transport> Builder<'a, M, T> {
    /// Lists resources.
    ///
    /// Returns identifier-only models, or full models when the query asks
    /// for details.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::InvalidFilter`] for an invalid filter,
    /// [`ResourceError::Http`] when the transport fails and
    /// [`ResourceError::Model`] when a model cannot be built.
    pub async fn get(&self, query: &ListQuery) -> Result<Vec<M>, ResourceError> {
        let options = self.build_list_request(query)?;

        tracing::debug!(entity = %self.entity, "Listing resources");
        let response = self.transport.get(&options).await?;

        self.map_list(&response, query.wants_details()).await
    }

    /// Maps a listing response to models.
    ///
    /// Entries without an identifier are skipped. With `details`, each
    /// handle is replaced in place by a [`find`](Self::find) of its
    /// identifier, one call at a time.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if a model cannot be built or a detail
    /// fetch fails.
    pub async fn map_list(&self, response: &Value, details: bool) -> Result<Vec<M>, ResourceError> {
        let ids = mapper::collect_identifiers(response, &self.primary_key);
        let mut models = ids
            .iter()
            .map(|id| mapper::identifier_handle(&self.primary_key, id))
            .collect::<Result<Vec<M>, _>>()?;

        tracing::debug!(entity = %self.entity, count = models.len(), "Collected resource handles");

        if details {
            for (model, id) in models.iter_mut().zip(&ids) {
                *model = self.find(mapper::identifier_to_string(id)).await?;
            }
            tracing::debug!(entity = %self.details_entity, count = models.len(), "Hydrated resources");
        }

        Ok(models)
    }

    /// Fetches one resource in full.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] on a 404 or an empty response,
    /// [`ResourceError::Http`] on any other transport failure and
    /// [`ResourceError::Model`] when the model cannot be built.
    pub async fn find(&self, id: impl Display) -> Result<M, ResourceError> {
        let id = id.to_string();
        let options = self.build_find_request(&id);

        tracing::debug!(entity = %self.details_entity, id = %id, "Fetching resource");
        let response = self
            .transport
            .get(&options)
            .await
            .map_err(|e| ResourceError::from_http(e, &self.details_entity, &id))?;

        mapper::map_find(&response, &self.details_entity, &id)
    }

    /// Fetches the blank schema of the entity as a model.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::EmptyResponse`] if the webservice returns no
    /// schema, [`ResourceError::Http`] when the transport fails and
    /// [`ResourceError::Model`] when the model cannot be built.
    pub async fn blank(&self) -> Result<M, ResourceError> {
        let options = self.build_blank_request();

        tracing::debug!(entity = %self.entity, "Fetching blank schema");
        let response = self.transport.get(&options).await?;

        let fields = mapper::first_entry(&response).ok_or_else(|| ResourceError::EmptyResponse {
            resource: self.entity.clone(),
            operation: "blank",
        })?;
        Ok(serde_json::from_value(fields.clone())?)
    }
}

impl<'a, M: Serialize + DeserializeOwned, T: Transport> Builder<'a, M, T> {
    /// Writes a model as an XML payload, `<prestashop><node>...</node></prestashop>`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Model`] if the model cannot be serialized and
    /// [`ResourceError::Xml`] if the document cannot be written.
    pub fn payload(&self, model: &M) -> Result<String, ResourceError> {
        let mut document = Map::new();
        document.insert(self.node.clone(), serde_json::to_value(model)?);
        Ok(value_to_xml(PAYLOAD_ROOT, &Value::Object(document))?)
    }

    /// Creates a resource and returns it as stored by the webservice.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::EmptyResponse`] if the answer carries no
    /// resource, and the payload, transport and model errors of the other
    /// operations.
    pub async fn create(&self, model: &M) -> Result<M, ResourceError> {
        let options = self.build_create_request(self.payload(model)?);

        tracing::debug!(entity = %self.entity, "Creating resource");
        let root = self.transport.add(&options).await?;

        mapper::map_create(&root, &self.entity, "create")
    }

    /// Updates a resource and returns it as stored by the webservice.
    ///
    /// The payload must carry the identifier as well; the webservice
    /// rejects updates whose body has no `id`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] on a 404,
    /// [`ResourceError::EmptyResponse`] if the answer carries no resource,
    /// and the payload, transport and model errors of the other operations.
    pub async fn update(&self, id: impl Display, model: &M) -> Result<M, ResourceError> {
        let id = id.to_string();
        let options = self.build_update_request(&id, self.payload(model)?);

        tracing::debug!(entity = %self.entity, id = %id, "Updating resource");
        let root = self
            .transport
            .edit(&options)
            .await
            .map_err(|e| ResourceError::from_http(e, &self.entity, &id))?;

        mapper::map_create(&root, &self.entity, "update")
    }
}

/// Appends `output_format=JSON` to a URL that does not name an output format.
fn with_output_format(url: &str) -> String {
    if url.contains(keys::OUTPUT_FORMAT) {
        return url.to_string();
    }
    let separator = if url.contains('?') { '&' } else { '?' };
    format!("{url}{separator}{}={OUTPUT_FORMAT_JSON}", keys::OUTPUT_FORMAT)
}
