use crate::{Entity, types::Ulid};

///
/// Author
///
/// Fixture with the conventional `id` primary key, picked up without an
/// attribute. The key is optional so unpersisted rows can exist.
///

#[derive(Clone, Debug, Entity)]
pub(crate) struct Author {
    pub(crate) id: Option<u64>,
    pub(crate) name: String,
}

impl Author {
    pub(crate) fn sample() -> Self {
        Self {
            id: Some(123),
            name: "Tolkien".to_string(),
        }
    }

    pub(crate) fn draft() -> Self {
        Self {
            id: None,
            name: "Unpublished".to_string(),
        }
    }
}

///
/// Book
///
/// Fixture with an attribute-marked primary key under a non-default name.
///

#[derive(Clone, Debug, Entity)]
pub(crate) struct Book {
    #[entity(primary_key)]
    pub(crate) uuid: Ulid,
    pub(crate) title: String,
}

impl Book {
    pub(crate) fn sample() -> Self {
        Self {
            uuid: Ulid::from_parts(1_700_000_000_000, 7),
            title: "The Hobbit".to_string(),
        }
    }
}
