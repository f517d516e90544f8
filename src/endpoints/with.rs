//! The `with` include expression.
//!
//! BAPI decides which relations to embed in a product from a single `with`
//! query parameter: comma separated tokens, nested relations joined with `.`,
//! and modifiers in `name:modifier(args)` form, e.g.
//! `attributes:key(color|size),images.attributes:legacy(false),categories:properties()`.
//!
//! Every expression contains [`BASE_IMAGE_EXPRESSION`]. Tokens are emitted in
//! a fixed order: attributes, advanced attributes, variants, images, price
//! range, categories.

use std::fmt;

/// Image expansion that is part of every `with` expression.
pub const BASE_IMAGE_EXPRESSION: &str = "images.attributes:legacy(false)";

/// Which attribute groups to embed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AttributeSelection {
    /// Every attribute group. Serializes as the bare relation name.
    All,
    /// Only the given keys. Serializes as `name:key(a|b)`.
    Keys(Vec<String>),
}

impl AttributeSelection {
    /// Selects the given attribute keys.
    pub fn keys<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Keys(keys.into_iter().map(Into::into).collect())
    }

    fn token(&self, name: &str) -> String {
        match self {
            Self::All => name.to_string(),
            Self::Keys(keys) => format!("{name}:key({})", keys.join("|")),
        }
    }
}

/// Which category properties to embed, inside [`CategorySelection::Properties`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CategoryProperties {
    /// `{properties: 'all'}`. Serializes as bare `categories`.
    All,
    /// Only the named properties. Serializes as `categories:properties(a|b)`.
    Named(Vec<String>),
}

/// Which categories data to embed.
///
/// The `All` shorthand and `Properties(CategoryProperties::All)` serialize
/// differently (`categories:properties()` vs `categories`). The API has
/// always been called this way.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CategorySelection {
    /// The `'all'` shorthand. Serializes as `categories:properties()`.
    All,
    /// An explicit properties selection.
    Properties(CategoryProperties),
}

impl CategorySelection {
    /// Selects the named category properties.
    pub fn properties<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Properties(CategoryProperties::Named(
            names.into_iter().map(Into::into).collect(),
        ))
    }

    fn token(&self) -> String {
        match self {
            Self::All => "categories:properties()".to_string(),
            Self::Properties(CategoryProperties::All) => "categories".to_string(),
            Self::Properties(CategoryProperties::Named(names)) => {
                format!("categories:properties({})", names.join("|"))
            }
        }
    }
}

/// Relations embedded inside each variant.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VariantWith {
    /// Variant attributes.
    pub attributes: Option<AttributeSelection>,
    /// Variant advanced attributes.
    pub advanced_attributes: Option<AttributeSelection>,
    /// The lowest price of the variant in the prior 30 days.
    pub lowest_prior_price: bool,
}

/// Which variants data to embed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum VariantSelection {
    /// Variants with their default fields.
    All,
    /// Variants with nested relations.
    Detailed(VariantWith),
}

impl VariantSelection {
    fn push_tokens(&self, prefix: &str, tokens: &mut Vec<String>) {
        let Self::Detailed(with) = self else {
            tokens.push(prefix.to_string());
            return;
        };

        let mut nested = Vec::new();
        if let Some(attributes) = &with.attributes {
            nested.push(attributes.token("attributes"));
        }
        if let Some(advanced) = &with.advanced_attributes {
            nested.push(advanced.token("advancedAttributes"));
        }
        if with.lowest_prior_price {
            nested.push("lowestPriorPrice".to_string());
        }

        if nested.is_empty() {
            tokens.push(prefix.to_string());
        } else {
            tokens.extend(nested.into_iter().map(|token| format!("{prefix}.{token}")));
        }
    }
}

/// Relations to embed in a product response.
///
/// # Example
///
/// ```rust
/// use bapi_client::endpoints::{AttributeSelection, CategorySelection, ProductWith};
///
/// let with = ProductWith::new()
///     .attributes(AttributeSelection::keys(["color", "size"]))
///     .categories(CategorySelection::All);
///
/// assert_eq!(
///     with.to_string(),
///     "attributes:key(color|size),images.attributes:legacy(false),categories:properties()"
/// );
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProductWith {
    /// Product attributes.
    pub attributes: Option<AttributeSelection>,
    /// Product advanced attributes.
    pub advanced_attributes: Option<AttributeSelection>,
    /// Product variants.
    pub variants: Option<VariantSelection>,
    /// The min/max price across variants.
    pub price_range: bool,
    /// Product categories.
    pub categories: Option<CategorySelection>,
}

impl ProductWith {
    /// Creates an empty selection; it still embeds the base images expression.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Embeds attributes.
    #[must_use]
    pub fn attributes(mut self, selection: AttributeSelection) -> Self {
        self.attributes = Some(selection);
        self
    }

    /// Embeds advanced attributes.
    #[must_use]
    pub fn advanced_attributes(mut self, selection: AttributeSelection) -> Self {
        self.advanced_attributes = Some(selection);
        self
    }

    /// Embeds variants.
    #[must_use]
    pub fn variants(mut self, selection: VariantSelection) -> Self {
        self.variants = Some(selection);
        self
    }

    /// Embeds the price range.
    #[must_use]
    pub const fn price_range(mut self, include: bool) -> Self {
        self.price_range = include;
        self
    }

    /// Embeds categories.
    #[must_use]
    pub fn categories(mut self, selection: CategorySelection) -> Self {
        self.categories = Some(selection);
        self
    }

    /// Returns the expression tokens in serialization order.
    #[must_use]
    pub fn tokens(&self) -> Vec<String> {
        let mut tokens = Vec::new();

        if let Some(attributes) = &self.attributes {
            tokens.push(attributes.token("attributes"));
        }
        if let Some(advanced) = &self.advanced_attributes {
            tokens.push(advanced.token("advancedAttributes"));
        }
        if let Some(variants) = &self.variants {
            variants.push_tokens("variants", &mut tokens);
        }

        tokens.push(BASE_IMAGE_EXPRESSION.to_string());

        if self.price_range {
            tokens.push("priceRange".to_string());
        }
        if let Some(categories) = &self.categories {
            tokens.push(categories.token());
        }

        tokens
    }

    /// Returns the `with` parameter value.
    ///
    /// Never empty: the base image expression is always included.
    #[must_use]
    pub fn to_query_value(&self) -> String {
        self.tokens().join(",")
    }
}

impl fmt::Display for ProductWith {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_query_value())
    }
}
