// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! HTTP implementation of [`DirectoryAdapter`].
//!
//! Talks to a JSM-Assets-style REST API: attribute reads under
//! `/object/{key}/attributes`, updates as PUT `/object/{key}`, lookups via
//! POST `/object/aql`, schema walks under `/objectschema` / `/objecttype`.

use super::{
    AttributeEntry, AttributeInfo, DirectoryAdapter, DirectoryError, ObjectRecord, ObjectTypeInfo,
};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tally_core::{
    AttributeId, DirectoryConfig, EmployeeId, ObjectKey, ObjectTypeId, SchemaConfig, SchemaId,
};

#[derive(Clone)]
pub struct HttpDirectoryAdapter {
    client: reqwest::Client,
    api_root: String,
    email: String,
    api_token: String,
    employee_type_name: String,
    employee_id_attr_name: String,
    asset_type_id: ObjectTypeId,
}

impl HttpDirectoryAdapter {
    pub fn new(directory: &DirectoryConfig, schema: &SchemaConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_root: directory.api_root(),
            email: directory.email.clone(),
            api_token: directory.api_token.clone(),
            employee_type_name: schema.employee_type_name.clone(),
            employee_id_attr_name: schema.employee_id_attr_name.clone(),
            asset_type_id: schema.asset_type_id,
        }
    }

    fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.client
            .get(format!("{}{}", self.api_root, path))
            .basic_auth(&self.email, Some(&self.api_token))
    }

    fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.client
            .post(format!("{}{}", self.api_root, path))
            .basic_auth(&self.email, Some(&self.api_token))
    }

    fn put(&self, path: &str) -> reqwest::RequestBuilder {
        self.client
            .put(format!("{}{}", self.api_root, path))
            .basic_auth(&self.email, Some(&self.api_token))
    }

    fn delete(&self, path: &str) -> reqwest::RequestBuilder {
        self.client
            .delete(format!("{}{}", self.api_root, path))
            .basic_auth(&self.email, Some(&self.api_token))
    }

    async fn run_aql(&self, query: String) -> Result<Vec<ObjectRecord>, DirectoryError> {
        tracing::debug!(%query, "running AQL query");
        let response = self
            .post("/object/aql?startAt=0&maxResults=100&includeAttributes=true")
            .json(&AqlRequest { ql_query: query })
            .send()
            .await
            .map_err(transport)?;
        let page: AqlPage = decode(check(response).await?).await?;
        Ok(page.values.into_iter().map(WireObject::into_record).collect())
    }
}

#[async_trait]
impl DirectoryAdapter for HttpDirectoryAdapter {
    async fn find_employee_by_business_key(
        &self,
        id: &EmployeeId,
    ) -> Result<Vec<ObjectRecord>, DirectoryError> {
        let query = format!(
            "objectType = \"{}\" AND \"{}\" = \"{}\"",
            aql_escape(&self.employee_type_name),
            aql_escape(&self.employee_id_attr_name),
            aql_escape(id.as_str()),
        );
        self.run_aql(query).await
    }

    async fn get_attributes(
        &self,
        key: &ObjectKey,
    ) -> Result<Vec<AttributeEntry>, DirectoryError> {
        tracing::debug!(object_key = %key, "fetching attributes");
        let response = self
            .get(&format!("/object/{key}/attributes"))
            .send()
            .await
            .map_err(transport)?;
        let rows: Vec<WireAttribute> = decode(check(response).await?).await?;
        Ok(rows.into_iter().map(WireAttribute::into_entry).collect())
    }

    async fn set_attribute(
        &self,
        key: &ObjectKey,
        attribute: AttributeId,
        value: &str,
    ) -> Result<(), DirectoryError> {
        tracing::info!(object_key = %key, attribute = %attribute, %value, "updating attribute");
        let body = UpdateRequest {
            attributes: vec![WireAttributeWrite::single(attribute, value)],
            object_type_id: self.asset_type_id.to_string(),
        };
        let response = self
            .put(&format!("/object/{key}"))
            .json(&body)
            .send()
            .await
            .map_err(transport)?;
        check(response).await?;
        Ok(())
    }

    async fn create_object(
        &self,
        type_id: ObjectTypeId,
        attributes: Vec<AttributeEntry>,
    ) -> Result<ObjectRecord, DirectoryError> {
        tracing::info!(object_type = %type_id, "creating object");
        let body = CreateRequest {
            object_type_id: type_id.to_string(),
            attributes: attributes.iter().map(WireAttributeWrite::from_entry).collect(),
        };
        let response = self
            .post("/object/create")
            .json(&body)
            .send()
            .await
            .map_err(transport)?;
        let created: WireObject = decode(check(response).await?).await?;
        Ok(created.into_record())
    }

    async fn delete_object(&self, key: &ObjectKey) -> Result<(), DirectoryError> {
        tracing::info!(object_key = %key, "deleting object");
        let response = self
            .delete(&format!("/object/{key}"))
            .send()
            .await
            .map_err(transport)?;
        check(response).await?;
        Ok(())
    }

    async fn list_object_types(
        &self,
        schema: SchemaId,
    ) -> Result<Vec<ObjectTypeInfo>, DirectoryError> {
        tracing::debug!(schema = %schema, "listing object types");
        let response = self
            .get(&format!("/objectschema/{schema}/objecttypes"))
            .send()
            .await
            .map_err(transport)?;
        let types: Vec<WireIdName> = decode(check(response).await?).await?;
        types
            .into_iter()
            .map(|t| {
                Ok(ObjectTypeInfo {
                    id: ObjectTypeId(t.numeric_id()?),
                    name: t.name,
                })
            })
            .collect()
    }

    async fn list_type_attributes(
        &self,
        type_id: ObjectTypeId,
    ) -> Result<Vec<AttributeInfo>, DirectoryError> {
        tracing::debug!(object_type = %type_id, "listing type attributes");
        let response = self
            .get(&format!("/objecttype/{type_id}/attributes"))
            .send()
            .await
            .map_err(transport)?;
        let attrs: Vec<WireIdName> = decode(check(response).await?).await?;
        attrs
            .into_iter()
            .map(|a| {
                Ok(AttributeInfo {
                    id: AttributeId(a.numeric_id()?),
                    name: a.name,
                })
            })
            .collect()
    }

    async fn query_objects(&self, type_name: &str) -> Result<Vec<ObjectRecord>, DirectoryError> {
        let query = format!("objectType = \"{}\"", aql_escape(type_name));
        self.run_aql(query).await
    }
}

fn transport(err: reqwest::Error) -> DirectoryError {
    DirectoryError::Transport(err.to_string())
}

async fn check(response: reqwest::Response) -> Result<reqwest::Response, DirectoryError> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        let body = response.text().await.unwrap_or_default();
        Err(DirectoryError::Status {
            status: status.as_u16(),
            body,
        })
    }
}

async fn decode<T: serde::de::DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, DirectoryError> {
    response
        .json::<T>()
        .await
        .map_err(|e| DirectoryError::Parse(e.to_string()))
}

fn aql_escape(raw: &str) -> String {
    raw.replace('"', "\\\"")
}

// --- wire types ---

#[derive(Serialize)]
struct AqlRequest {
    #[serde(rename = "qlQuery")]
    ql_query: String,
}

#[derive(Deserialize)]
struct AqlPage {
    #[serde(default)]
    values: Vec<WireObject>,
}

#[derive(Deserialize)]
struct WireObject {
    #[serde(default)]
    id: serde_json::Value,
    #[serde(rename = "objectKey", default)]
    object_key: String,
    #[serde(default)]
    label: Option<String>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    attributes: Vec<WireAttribute>,
}

impl WireObject {
    fn into_record(self) -> ObjectRecord {
        let name = self.label.or(self.name).unwrap_or_default();
        let id = match &self.id {
            serde_json::Value::String(s) => s.clone(),
            serde_json::Value::Number(n) => n.to_string(),
            _ => String::new(),
        };
        ObjectRecord {
            id,
            object_key: ObjectKey::new(self.object_key),
            name,
            attributes: self
                .attributes
                .into_iter()
                .map(WireAttribute::into_entry)
                .collect(),
        }
    }
}

#[derive(Deserialize)]
struct WireAttribute {
    #[serde(rename = "objectTypeAttributeId")]
    attribute_id: WireNumber,
    #[serde(rename = "objectAttributeValues", default)]
    values: Vec<WireValue>,
}

impl WireAttribute {
    fn into_entry(self) -> AttributeEntry {
        AttributeEntry {
            attribute_id: AttributeId(self.attribute_id.0),
            values: self.values.into_iter().filter_map(|v| v.value).collect(),
        }
    }
}

#[derive(Deserialize)]
struct WireValue {
    #[serde(default)]
    value: Option<String>,
}

/// Attribute id on the wire: numeric in reads, sometimes a numeric string.
struct WireNumber(u64);

impl<'de> Deserialize<'de> for WireNumber {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = serde_json::Value::deserialize(deserializer)?;
        match &raw {
            serde_json::Value::Number(n) => n
                .as_u64()
                .map(WireNumber)
                .ok_or_else(|| serde::de::Error::custom("attribute id is not a u64")),
            serde_json::Value::String(s) => s
                .parse::<u64>()
                .map(WireNumber)
                .map_err(|_| serde::de::Error::custom("attribute id is not numeric")),
            _ => Err(serde::de::Error::custom("attribute id has unexpected type")),
        }
    }
}

#[derive(Deserialize)]
struct WireIdName {
    id: serde_json::Value,
    name: String,
}

impl WireIdName {
    fn numeric_id(&self) -> Result<u64, DirectoryError> {
        match &self.id {
            serde_json::Value::Number(n) => n
                .as_u64()
                .ok_or_else(|| DirectoryError::Parse("id is not a u64".to_string())),
            serde_json::Value::String(s) => s
                .parse::<u64>()
                .map_err(|_| DirectoryError::Parse(format!("non-numeric id: {s}"))),
            other => Err(DirectoryError::Parse(format!("unexpected id: {other}"))),
        }
    }
}

#[derive(Serialize)]
struct UpdateRequest {
    attributes: Vec<WireAttributeWrite>,
    #[serde(rename = "objectTypeId")]
    object_type_id: String,
}

#[derive(Serialize)]
struct CreateRequest {
    #[serde(rename = "objectTypeId")]
    object_type_id: String,
    attributes: Vec<WireAttributeWrite>,
}

#[derive(Serialize)]
struct WireAttributeWrite {
    #[serde(rename = "objectTypeAttributeId")]
    attribute_id: String,
    #[serde(rename = "objectAttributeValues")]
    values: Vec<WireValueWrite>,
}

impl WireAttributeWrite {
    fn single(attribute: AttributeId, value: &str) -> Self {
        Self {
            attribute_id: attribute.to_string(),
            values: vec![WireValueWrite {
                value: value.to_string(),
            }],
        }
    }

    fn from_entry(entry: &AttributeEntry) -> Self {
        Self {
            attribute_id: entry.attribute_id.to_string(),
            values: entry
                .values
                .iter()
                .map(|v| WireValueWrite { value: v.clone() })
                .collect(),
        }
    }
}

#[derive(Serialize)]
struct WireValueWrite {
    value: String,
}

#[cfg(test)]
#[path = "http_tests.rs"]
mod tests;
