//! Sitewide banner content stored in a CMS metaobject.

use serde::{Deserialize, Serialize};

use crate::client::StorefrontClient;
use crate::error::{Result, StorefrontError};
use crate::links::collection_path;
use crate::queries::SITEWIDE_BANNER;

/// Metaobject type holding sitewide banners.
pub const SITEWIDE_BANNER_TYPE: &str = "sitewide_banner";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MetaobjectReference {
	#[serde(default)]
	pub handle: Option<String>,
	#[serde(default)]
	pub title: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MetaobjectField {
	pub key: String,
	#[serde(default)]
	pub value: Option<String>,
	#[serde(default)]
	pub reference: Option<MetaobjectReference>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionLink {
	pub handle: String,
	pub title: String,
}

/// Decoded banner: rotating messages linking to one collection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SitewideBanner {
	pub background_color: Option<String>,
	pub foreground_color: Option<String>,
	pub contents: Vec<String>,
	pub collection: Option<CollectionLink>,
}

impl SitewideBanner {
	/// Folds metaobject fields into a banner.
	///
	/// `contents` holds a JSON array of strings; `collection` is read from the
	/// field reference. Unknown keys are ignored.
	pub fn from_fields(fields: &[MetaobjectField]) -> Result<Self> {
		let mut banner = Self::default();
		for field in fields {
			match field.key.as_str() {
				"contents" => {
					let raw = field.value.as_deref().unwrap_or("[]");
					banner.contents = serde_json::from_str(raw)
						.map_err(|e| StorefrontError::InvalidInput(format!("banner contents: {e}")))?;
				}
				"collection" => {
					banner.collection = field.reference.as_ref().and_then(|r| {
						Some(CollectionLink {
							handle: r.handle.clone()?,
							title: r.title.clone().unwrap_or_default(),
						})
					});
				}
				"background_color" => banner.background_color = field.value.clone(),
				"foreground_color" => banner.foreground_color = field.value.clone(),
				_ => {}
			}
		}
		Ok(banner)
	}

	pub fn href(&self) -> Option<String> {
		self.collection.as_ref().map(|c| collection_path(&c.handle))
	}

	pub fn link_title(&self) -> Option<String> {
		self.collection.as_ref().map(|c| format!("Go to {}", c.title))
	}
}

#[derive(Serialize)]
struct BannerVariables<'a> {
	handle: &'a str,
	#[serde(rename = "type")]
	kind: &'static str,
}

#[derive(Deserialize)]
struct BannerData {
	metaobject: Option<BannerMetaobject>,
}

#[derive(Deserialize)]
struct BannerMetaobject {
	fields: Vec<MetaobjectField>,
}

impl StorefrontClient {
	/// Loads the banner metaobject `handle`, or `None` if it does not exist.
	pub async fn sitewide_banner(&self, handle: &str) -> Result<Option<SitewideBanner>> {
		let variables = BannerVariables {
			handle,
			kind: SITEWIDE_BANNER_TYPE,
		};
		let response = self.execute::<_, BannerData>(&SITEWIDE_BANNER, &variables).await?;
		if let Some(errors) = response.joined_errors() {
			return Err(StorefrontError::GraphQl(errors));
		}
		response
			.data
			.and_then(|data| data.metaobject)
			.map(|metaobject| SitewideBanner::from_fields(&metaobject.fields))
			.transpose()
	}
}
