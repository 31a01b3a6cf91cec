use convert_case::{Case, Casing};

///
/// NamingStrategy
///
/// Maps entity and property names onto storage-level identifiers. The
/// normalizer itself never renames fields; strategies exist for the layer
/// that turns canonical conditions into backend queries.
///

pub trait NamingStrategy {
    /// Table (or collection) name for an entity type name.
    fn class_to_table_name(&self, entity: &str) -> String;

    /// Column name for a scalar property.
    fn property_to_column_name(&self, property: &str) -> String;

    /// Column name a reference points at on the target side.
    fn reference_column_name(&self) -> String;

    /// Column name for a property holding a reference.
    fn join_column_name(&self, property: &str) -> String;

    /// Pivot table name for a many-to-many property. Unowned relations
    /// carry no property name and fall back to the two entity names.
    fn join_table_name(&self, source: &str, target: &str, property: Option<&str>) -> String;

    /// Pivot-side column name pointing back at `entity`.
    fn join_key_column_name(&self, entity: &str, referenced: Option<&str>) -> String;
}

///
/// UnderscoreNamingStrategy
///

#[derive(Clone, Copy, Debug, Default)]
pub struct UnderscoreNamingStrategy;

impl NamingStrategy for UnderscoreNamingStrategy {
    fn class_to_table_name(&self, entity: &str) -> String {
        entity.to_case(Case::Snake)
    }

    fn property_to_column_name(&self, property: &str) -> String {
        property.to_case(Case::Snake)
    }

    fn reference_column_name(&self) -> String {
        "id".to_string()
    }

    fn join_column_name(&self, property: &str) -> String {
        format!(
            "{}_{}",
            property.to_case(Case::Snake),
            self.reference_column_name()
        )
    }

    fn join_table_name(&self, source: &str, target: &str, property: Option<&str>) -> String {
        match property {
            Some(property) => format!(
                "{}_{}",
                self.class_to_table_name(source),
                property.to_case(Case::Snake)
            ),
            None => format!(
                "{}_to_{}",
                self.class_to_table_name(source),
                self.class_to_table_name(target)
            ),
        }
    }

    fn join_key_column_name(&self, entity: &str, referenced: Option<&str>) -> String {
        let referenced = referenced.map_or_else(|| self.reference_column_name(), str::to_string);

        format!("{}_{referenced}", self.class_to_table_name(entity))
    }
}

///
/// MongoNamingStrategy
///
/// Document stores keep application-level names as-is and reserve `_id`
/// for the primary key.
///

#[derive(Clone, Copy, Debug, Default)]
pub struct MongoNamingStrategy;

impl NamingStrategy for MongoNamingStrategy {
    fn class_to_table_name(&self, entity: &str) -> String {
        entity.to_string()
    }

    fn property_to_column_name(&self, property: &str) -> String {
        property.to_string()
    }

    fn reference_column_name(&self) -> String {
        "_id".to_string()
    }

    fn join_column_name(&self, property: &str) -> String {
        property.to_string()
    }

    fn join_table_name(&self, source: &str, target: &str, property: Option<&str>) -> String {
        match property {
            Some(property) => format!("{source}_{property}"),
            None => format!("{source}_{target}"),
        }
    }

    fn join_key_column_name(&self, entity: &str, referenced: Option<&str>) -> String {
        referenced.map_or_else(|| entity.to_string(), |column| format!("{entity}_{column}"))
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn underscore_tables_and_columns() {
        let naming = UnderscoreNamingStrategy;

        assert_eq!(naming.class_to_table_name("BookTag"), "book_tag");
        assert_eq!(naming.property_to_column_name("createdAt"), "created_at");
        assert_eq!(naming.reference_column_name(), "id");
        assert_eq!(naming.join_column_name("author"), "author_id");
    }

    #[test]
    fn underscore_join_tables() {
        let naming = UnderscoreNamingStrategy;

        assert_eq!(
            naming.join_table_name("Author", "Book", Some("favouriteBooks")),
            "author_favourite_books"
        );
        assert_eq!(
            naming.join_table_name("Author", "Book", None),
            "author_to_book"
        );
        assert_eq!(naming.join_key_column_name("Author", None), "author_id");
        assert_eq!(
            naming.join_key_column_name("Author", Some("uuid")),
            "author_uuid"
        );
    }

    #[test]
    fn mongo_keeps_names_verbatim() {
        let naming = MongoNamingStrategy;

        assert_eq!(naming.class_to_table_name("BookTag"), "BookTag");
        assert_eq!(naming.property_to_column_name("createdAt"), "createdAt");
        assert_eq!(naming.reference_column_name(), "_id");
        assert_eq!(naming.join_column_name("author"), "author");
    }

    #[test]
    fn mongo_join_tables() {
        let naming = MongoNamingStrategy;

        assert_eq!(
            naming.join_table_name("Author", "Book", Some("books")),
            "Author_books"
        );
        assert_eq!(naming.join_table_name("Author", "Book", None), "Author_Book");
        assert_eq!(naming.join_key_column_name("Author", None), "Author");
        assert_eq!(
            naming.join_key_column_name("Author", Some("_id")),
            "Author__id"
        );
    }
}
