//! GraphQL documents sent to the Storefront API.

/// A named GraphQL document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Operation {
	pub name: &'static str,
	pub document: &'static str,
}

macro_rules! money_fragment {
	() => {
		r#"
fragment MoneyProductItem on MoneyV2 {
  amount
  currencyCode
}
"#
	};
}

macro_rules! product_fields {
	() => {
		r#"
  id
  title
  handle
  featuredImage {
    id
    altText
    url
    width
    height
  }
  priceRange {
    minVariantPrice {
      ...MoneyProductItem
    }
    maxVariantPrice {
      ...MoneyProductItem
    }
  }
  variants(first: 10) {
    nodes {
      id
      availableForSale
      selectedOptions {
        name
        value
      }
    }
  }
  options {
    id
    name
    optionValues {
      id
      name
    }
  }
"#
	};
}

pub const PREDICTIVE_SEARCH: Operation = Operation {
	name: "PredictiveSearch",
	document: concat!(
		r#"
query PredictiveSearch(
  $country: CountryCode
  $language: LanguageCode
  $limit: Int!
  $limitScope: PredictiveSearchLimitScope!
  $term: String!
  $types: [PredictiveSearchType!]
) @inContext(country: $country, language: $language) {
  predictiveSearch(
    limit: $limit,
    limitScope: $limitScope,
    query: $term,
    types: $types,
    searchableFields: [TITLE, PRODUCT_TYPE, VARIANTS_TITLE, VENDOR, BODY]
  ) {
    articles {
      ...PredictiveArticle
    }
    collections {
      ...PredictiveCollection
    }
    pages {
      ...PredictivePage
    }
    products {
      ...PredictiveProduct
    }
    queries {
      ...PredictiveQuery
    }
  }
}
fragment PredictiveArticle on Article {
  __typename
  id
  title
  handle
  blog {
    handle
  }
  image {
    url
    altText
    width
    height
  }
  trackingParameters
}
fragment PredictiveCollection on Collection {
  __typename
  id
  title
  handle
  image {
    url
    altText
    width
    height
  }
  trackingParameters
}
fragment PredictivePage on Page {
  __typename
  id
  title
  handle
  trackingParameters
}
fragment PredictiveQuery on SearchQuerySuggestion {
  __typename
  text
  styledText
  trackingParameters
}
fragment PredictiveProduct on Product {
  __typename
  trackingParameters
"#,
		product_fields!(),
		"}\n",
		money_fragment!(),
	),
};

pub const REGULAR_SEARCH: Operation = Operation {
	name: "RegularSearch",
	document: concat!(
		r#"
query RegularSearch(
  $country: CountryCode
  $endCursor: String
  $first: Int
  $language: LanguageCode
  $last: Int
  $term: String!
  $startCursor: String
) @inContext(country: $country, language: $language) {
  articles: search(query: $term, types: [ARTICLE], first: $first) {
    nodes {
      ...on Article {
        ...SearchArticle
      }
    }
  }
  pages: search(query: $term, types: [PAGE], first: $first) {
    nodes {
      ...on Page {
        ...SearchPage
      }
    }
  }
  products: search(
    after: $endCursor,
    before: $startCursor,
    first: $first,
    last: $last,
    query: $term,
    sortKey: RELEVANCE,
    types: [PRODUCT],
    unavailableProducts: HIDE,
  ) {
    nodes {
      ...on Product {
        ...SearchProduct
      }
    }
    pageInfo {
      ...PageInfoFragment
    }
  }
}
fragment SearchPage on Page {
  __typename
  handle
  id
  title
  trackingParameters
}
fragment SearchArticle on Article {
  __typename
  handle
  id
  title
  trackingParameters
}
fragment PageInfoFragment on PageInfo {
  hasNextPage
  hasPreviousPage
  startCursor
  endCursor
}
fragment SearchProduct on Product {
  __typename
  trackingParameters
"#,
		product_fields!(),
		"}\n",
		money_fragment!(),
	),
};

pub const COLLECTION: Operation = Operation {
	name: "Collection",
	document: concat!(
		r#"
query Collection(
  $handle: String!
  $country: CountryCode
  $language: LanguageCode
  $first: Int
  $last: Int
  $startCursor: String
  $endCursor: String
  $filters: [ProductFilter!]
) @inContext(country: $country, language: $language) {
  collection(handle: $handle) {
    id
    handle
    title
    descriptionHtml
    products(
      first: $first,
      last: $last,
      before: $startCursor,
      after: $endCursor,
      filters: $filters
    ) {
      nodes {
        ...PLPItem
      }
      pageInfo {
        hasPreviousPage
        hasNextPage
        endCursor
        startCursor
      }
    }
  }
}
fragment PLPItem on Product {
"#,
		product_fields!(),
		"}\n",
		money_fragment!(),
	),
};

pub const FACETS: Operation = Operation {
	name: "Facets",
	document: r#"
query Facets($collectionHandle: String!) {
  collection(handle: $collectionHandle) {
    handle
    products(first: 36) {
      filters {
        id
        label
        type
        values {
          count
          id
          label
          input
        }
      }
    }
  }
}
"#,
};

pub const SITEWIDE_BANNER: Operation = Operation {
	name: "SitewideBanner",
	document: r#"
query SitewideBanner($handle: String!, $type: String!) {
  metaobject(handle: {handle: $handle, type: $type}) {
    fields {
      key
      value
      reference {
        ...on Collection {
          handle
          title
        }
      }
    }
  }
}
"#,
};

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn product_fragments_are_spliced() {
		for op in [PREDICTIVE_SEARCH, REGULAR_SEARCH, COLLECTION] {
			assert!(op.document.contains("fragment MoneyProductItem on MoneyV2"), "{}", op.name);
			assert!(op.document.contains("minVariantPrice"), "{}", op.name);
			assert!(op.document.contains(&format!("query {}", op.name)), "{}", op.name);
		}
	}

	#[test]
	fn braces_are_balanced() {
		for op in [PREDICTIVE_SEARCH, REGULAR_SEARCH, COLLECTION, FACETS, SITEWIDE_BANNER] {
			let open = op.document.matches('{').count();
			let close = op.document.matches('}').count();
			assert_eq!(open, close, "{}", op.name);
		}
	}
}
