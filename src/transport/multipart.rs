use reqwest::multipart::Form;
use serde::Serialize;

use crate::error::ApiResult;

/// One named part of a multipart body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Part {
    pub name: String,
    pub content_type: String,
    pub file_name: Option<String>,
    pub bytes: Vec<u8>,
}

/// Multipart body kept as plain parts until it is sent, so it can be
/// inspected before it turns into an opaque `reqwest` form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MultipartBody {
    parts: Vec<Part>,
}

impl MultipartBody {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a JSON-serialized part with content type `application/json`
    pub fn json_part<T: Serialize + ?Sized>(
        mut self,
        name: impl Into<String>,
        value: &T,
    ) -> ApiResult<Self> {
        self.parts.push(Part {
            name: name.into(),
            content_type: "application/json".to_string(),
            file_name: None,
            bytes: serde_json::to_vec(value)?,
        });
        Ok(self)
    }

    pub fn file_part(
        mut self,
        name: impl Into<String>,
        file_name: impl Into<String>,
        content_type: impl Into<String>,
        bytes: Vec<u8>,
    ) -> Self {
        self.parts.push(Part {
            name: name.into(),
            content_type: content_type.into(),
            file_name: Some(file_name.into()),
            bytes,
        });
        self
    }

    pub fn parts(&self) -> &[Part] {
        &self.parts
    }

    pub fn names(&self) -> Vec<&str> {
        self.parts.iter().map(|p| p.name.as_str()).collect()
    }

    pub fn into_form(self) -> ApiResult<Form> {
        let mut form = Form::new();
        for part in self.parts {
            let mut body = reqwest::multipart::Part::bytes(part.bytes).mime_str(&part.content_type)?;
            if let Some(file_name) = part.file_name {
                body = body.file_name(file_name);
            }
            form = form.part(part.name, body);
        }
        Ok(form)
    }
}
