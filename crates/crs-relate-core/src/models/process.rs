//! Descriptive metadata of the CRS extent process.
//!
//! Hosts read this for capability discovery. None of it is executed.

use serde::{Deserialize, Serialize};

use super::record::DE9IM_OUTPUT_ID;

pub const PROCESS_ID: &str = "crs-extent";
pub const PROCESS_VERSION: &str = "0.0.1";
pub const DEFAULT_WKT: &str = "MULTIPOINT ((10 40), (40 30), (20 20), (30 10))";
pub const DEFAULT_CRS: &str = "EPSG:4326";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessMetadata {
    pub version: String,
    pub id: String,
    pub title: String,
    pub description: String,
    pub keywords: Vec<String>,
    pub links: Vec<Link>,
    pub inputs: Vec<InputDescriptor>,
    pub outputs: Vec<OutputDescriptor>,
    pub example: ExampleRequest,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Link {
    #[serde(rename = "type")]
    pub media_type: String,
    pub rel: String,
    pub title: String,
    pub href: String,
    pub hreflang: String,
}

impl Link {
    fn help(title: &str, href: &str) -> Self {
        Self {
            media_type: "text/html".to_string(),
            rel: "help".to_string(),
            title: title.to_string(),
            href: href.to_string(),
            hreflang: "en-US".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InputDescriptor {
    pub id: String,
    pub title: String,
    #[serde(rename = "abstract")]
    pub summary: String,
    pub input: LiteralInput,
    pub min_occurs: u32,
    /// `None` means unbounded.
    pub max_occurs: Option<u32>,
    pub keywords: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LiteralInput {
    pub literal_data_domain: LiteralDataDomain,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LiteralDataDomain {
    pub data_type: String,
    pub value_definition: ValueDefinition,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValueDefinition {
    pub any_value: bool,
    pub default_value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputDescriptor {
    pub id: String,
    pub title: String,
    pub description: String,
    pub output: OutputFormats,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputFormats {
    pub formats: Vec<OutputFormat>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutputFormat {
    pub mime_type: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExampleRequest {
    pub inputs: Vec<ExampleInput>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExampleInput {
    pub id: String,
    pub value: String,
    #[serde(rename = "type")]
    pub media_type: String,
}

impl ExampleInput {
    fn text(id: &str, value: &str) -> Self {
        Self { id: id.to_string(), value: value.to_string(), media_type: "text/plain".to_string() }
    }
}

fn literal_string(default_value: &str) -> LiteralInput {
    LiteralInput {
        literal_data_domain: LiteralDataDomain {
            data_type: "string".to_string(),
            value_definition: ValueDefinition {
                any_value: false,
                default_value: default_value.to_string(),
            },
        },
    }
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

impl ProcessMetadata {
    /// Metadata of the `crs-extent` process.
    pub fn crs_extent() -> Self {
        Self {
            version: PROCESS_VERSION.to_string(),
            id: PROCESS_ID.to_string(),
            title: "CRS Extent".to_string(),
            description: "A process that validates geometric relationships between an arbitrary \
                geometry and its declared CRS' extent. For example, this process allows you to \
                take a geometry that is stated to be recorded in a particular coordinate \
                reference system, and then validate whether it is actually contained by the \
                CRS' area of use"
                .to_string(),
            keywords: strings(&["CRS", "extent", "topology", "DE-9IM"]),
            links: vec![
                Link::help("DE-9IM information", "https://en.wikipedia.org/wiki/DE-9IM"),
                Link::help(
                    "OGC Simple Features: the relate operation",
                    "https://www.ogc.org/standard/sfa/",
                ),
            ],
            inputs: vec![
                InputDescriptor {
                    id: "wkt".to_string(),
                    title: "WKT geometry".to_string(),
                    summary: "Candidate geometry.".to_string(),
                    input: literal_string(DEFAULT_WKT),
                    min_occurs: 1,
                    max_occurs: None,
                    keywords: strings(&["WKT", "geometry"]),
                },
                InputDescriptor {
                    id: "crs".to_string(),
                    title: "CRS".to_string(),
                    summary: "CRS of the input geometry. If multiple geometries are given, all \
                        are assumed to have the same declared CRS."
                        .to_string(),
                    input: literal_string(DEFAULT_CRS),
                    min_occurs: 1,
                    max_occurs: Some(1),
                    keywords: strings(&["CRS", "PROJ"]),
                },
            ],
            outputs: vec![OutputDescriptor {
                id: DE9IM_OUTPUT_ID.to_string(),
                title: "DE-9IM relationship".to_string(),
                description: "A string representing the DE-9IM relationship between the bounds \
                    of the input CRS, and the candidate geometry."
                    .to_string(),
                output: OutputFormats {
                    formats: vec![OutputFormat { mime_type: "application/json".to_string() }],
                },
            }],
            example: ExampleRequest {
                inputs: vec![
                    ExampleInput::text("wkt", DEFAULT_WKT),
                    ExampleInput::text("crs", DEFAULT_CRS),
                ],
            },
        }
    }

    /// Look up an input descriptor by id
    pub fn input(&self, id: &str) -> Option<&InputDescriptor> {
        self.inputs.iter().find(|input| input.id == id)
    }

    /// Default value declared for an input
    pub fn default_value(&self, id: &str) -> Option<&str> {
        self.input(id)
            .map(|input| input.input.literal_data_domain.value_definition.default_value.as_str())
    }

    /// Replace the default value declared for an input. Returns `false` if
    /// there is no input with that id.
    pub fn set_default_value(&mut self, id: &str, value: impl Into<String>) -> bool {
        match self.inputs.iter_mut().find(|input| input.id == id) {
            Some(input) => {
                input.input.literal_data_domain.value_definition.default_value = value.into();
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let metadata = ProcessMetadata::crs_extent();
        assert_eq!(metadata.default_value("wkt"), Some(DEFAULT_WKT));
        assert_eq!(metadata.default_value("crs"), Some("EPSG:4326"));
        assert_eq!(metadata.default_value("missing"), None);
    }

    #[test]
    fn test_set_default_value() {
        let mut metadata = ProcessMetadata::crs_extent();

        assert!(metadata.set_default_value("wkt", "POINT (1 2)"));
        assert_eq!(metadata.default_value("wkt"), Some("POINT (1 2)"));
        assert!(!metadata.set_default_value("missing", "x"));

        // The example request is left alone
        assert_eq!(metadata.example.inputs[0].value, DEFAULT_WKT);
    }

    #[test]
    fn test_json_field_names() {
        let json = serde_json::to_value(ProcessMetadata::crs_extent()).unwrap();

        assert_eq!(json["id"], "crs-extent");
        assert_eq!(json["inputs"][0]["minOccurs"], 1);
        assert!(json["inputs"][0]["maxOccurs"].is_null());
        assert_eq!(json["inputs"][1]["maxOccurs"], 1);
        assert_eq!(json["inputs"][0]["abstract"], "Candidate geometry.");
        assert_eq!(
            json["inputs"][1]["input"]["literalDataDomain"]["valueDefinition"]["defaultValue"],
            "EPSG:4326"
        );
        assert_eq!(json["outputs"][0]["output"]["formats"][0]["mimeType"], "application/json");
        assert_eq!(json["links"][0]["type"], "text/html");
    }
}
