//! Raw Storefront API response shapes.
//!
//! Every field is optional here: the decoding boundary accepts whatever
//! subset of the document Shopify returns, and `conversions` turns missing
//! or null sequences into empty ones.

use serde::{Deserialize, Deserializer};
use storefront_relay_core::GraphQLError;

/// The `{data, errors}` envelope.
#[derive(Debug, Deserialize)]
pub struct GraphQLResponse<T> {
    /// Query result, absent when the whole query failed.
    pub data: Option<T>,
    /// GraphQL errors, normalized to a list.
    #[serde(default, deserialize_with = "deserialize_errors")]
    pub errors: Vec<GraphQLError>,
}

/// Accept `errors` as an array of error objects, a single message string
/// (Shopify uses this form for auth failures), or null.
fn deserialize_errors<'de, D>(deserializer: D) -> Result<Vec<GraphQLError>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Errors {
        List(Vec<GraphQLError>),
        Message(String),
    }

    Ok(match Option::<Errors>::deserialize(deserializer)? {
        None => Vec::new(),
        Some(Errors::List(errors)) => errors,
        Some(Errors::Message(message)) => vec![GraphQLError {
            message,
            locations: Vec::new(),
            path: Vec::new(),
        }],
    })
}

/// Body the relay sends with a non-200 status.
#[derive(Debug, Deserialize)]
pub struct RelayErrorBody {
    pub error: String,
}

/// A GraphQL connection. `edges` may be absent or null.
#[derive(Debug, Deserialize)]
pub struct Connection<T> {
    pub edges: Option<Vec<Edge<T>>>,
}

#[derive(Debug, Deserialize)]
pub struct Edge<T> {
    pub node: T,
}

/// `data` of the collections query.
#[derive(Debug, Deserialize)]
pub struct CollectionsData {
    pub collections: Option<Connection<CollectionNode>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionNode {
    pub id: Option<String>,
    pub title: Option<String>,
    pub handle: Option<String>,
    pub description: Option<String>,
    pub image: Option<ImageNode>,
    pub products: Option<Connection<ProductNode>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductNode {
    pub id: Option<String>,
    pub title: Option<String>,
    pub handle: Option<String>,
    pub description: Option<String>,
    pub total_inventory: Option<i64>,
    pub price_range: Option<PriceRangeNode>,
    pub images: Option<Connection<ImageNode>>,
    pub variants: Option<Connection<VariantNode>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceRangeNode {
    pub min_variant_price: Option<MoneyNode>,
    pub max_variant_price: Option<MoneyNode>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoneyNode {
    pub amount: Option<String>,
    pub currency_code: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VariantNode {
    pub id: Option<String>,
    pub title: Option<String>,
    pub price: Option<MoneyNode>,
    pub quantity_available: Option<i64>,
    pub selected_options: Option<Vec<SelectedOptionNode>>,
}

#[derive(Debug, Deserialize)]
pub struct SelectedOptionNode {
    pub name: String,
    pub value: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageNode {
    pub url: String,
    pub alt_text: Option<String>,
}
