//! # Schema Registry
//!
//! Process-wide map from entity type to its compiled [`Schema`].
//!
//! Schemas are registered once at startup (see
//! [`crate::entity::register_builtin_schemas`]). Lookups from entity
//! constructors fall back to registering on first use; that path is
//! check-then-populate under a write lock so concurrent first use compiles
//! at most once. Entries are never replaced.

use std::any::TypeId;
use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

use parking_lot::RwLock;

use super::compiler::Schema;
use super::descriptor::FieldDescriptor;
use super::layout::CompositeLayout;
use crate::config::ReplicationConfig;
use crate::error::{ReplicationError, ReplicationResult};

/// An entity type with a wire schema.
pub trait Replicated: 'static {
    /// Schema name used in logs and errors.
    const NAME: &'static str;
    /// Descriptor table in declaration order.
    const FIELDS: &'static [FieldDescriptor];
}

/// Registry of compiled schemas keyed by entity type.
pub struct SchemaRegistry {
    config: ReplicationConfig,
    schemas: RwLock<HashMap<TypeId, Arc<Schema>>>,
}

impl SchemaRegistry {
    /// Creates an empty registry with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(ReplicationConfig::default())
    }

    /// Creates an empty registry that compiles under `config`.
    #[must_use]
    pub fn with_config(config: ReplicationConfig) -> Self {
        Self {
            config,
            schemas: RwLock::new(HashMap::new()),
        }
    }

    /// Active configuration.
    #[must_use]
    pub fn config(&self) -> &ReplicationConfig {
        &self.config
    }

    /// Compiles and stores the schema for `T`, or returns the stored one.
    ///
    /// # Errors
    ///
    /// Returns the compile error for a mis-declared descriptor table. A
    /// failed compile stores nothing.
    pub fn register<T: Replicated>(&self) -> ReplicationResult<Arc<Schema>> {
        let key = TypeId::of::<T>();
        if let Some(schema) = self.schemas.read().get(&key) {
            return Ok(Arc::clone(schema));
        }

        let mut schemas = self.schemas.write();
        // Another caller may have won the race between the two locks.
        if let Some(schema) = schemas.get(&key) {
            return Ok(Arc::clone(schema));
        }

        let schema = Arc::new(Schema::compile_with(T::NAME, T::FIELDS, &self.config)?);
        schemas.insert(key, Arc::clone(&schema));
        tracing::debug!(schema = T::NAME, blocks = schema.total_blocks(), "registered schema");
        Ok(schema)
    }

    /// Returns the stored schema for `T` without compiling.
    #[must_use]
    pub fn get<T: Replicated>(&self) -> Option<Arc<Schema>> {
        self.schemas.read().get(&TypeId::of::<T>()).cloned()
    }

    /// Number of registered schemas.
    #[must_use]
    pub fn len(&self) -> usize {
        self.schemas.read().len()
    }

    /// Returns true if nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.schemas.read().is_empty()
    }

    /// Lays schemas out as one composite and checks it still fits the mask.
    ///
    /// # Errors
    ///
    /// Returns [`ReplicationError::SchemaTooLarge`] if it does not.
    pub fn check_composite(
        &self,
        name: &'static str,
        parts: &[&Schema],
    ) -> ReplicationResult<CompositeLayout> {
        let layout = CompositeLayout::new(name, parts, &self.config)?;
        tracing::debug!(composite = name, blocks = layout.total_blocks(), "checked composite");
        Ok(layout)
    }
}

impl Default for SchemaRegistry {
    fn default() -> Self {
        Self::new()
    }
}

static GLOBAL: OnceLock<SchemaRegistry> = OnceLock::new();

/// The process-wide registry. Uses the default configuration unless
/// [`install_global`] ran first.
pub fn global() -> &'static SchemaRegistry {
    GLOBAL.get_or_init(SchemaRegistry::new)
}

/// Installs the process-wide registry with `config`.
///
/// # Errors
///
/// Returns [`ReplicationError::InvalidConfig`] if `config` is invalid or the
/// global registry was already initialized.
pub fn install_global(config: ReplicationConfig) -> ReplicationResult<&'static SchemaRegistry> {
    config.validate()?;
    let mut installed = false;
    let registry = GLOBAL.get_or_init(|| {
        installed = true;
        SchemaRegistry::with_config(config)
    });
    if installed {
        Ok(registry)
    } else {
        Err(ReplicationError::InvalidConfig(
            "schema registry already initialized".to_string(),
        ))
    }
}

/// Schema for `T` from the global registry, compiling it on first use.
///
/// # Panics
///
/// Panics if `T`'s descriptor table is mis-declared. That is a programming
/// error caught the first time the type is constructed, never by traffic.
pub fn schema_of<T: Replicated>() -> Arc<Schema> {
    match global().register::<T>() {
        Ok(schema) => schema,
        Err(e) => {
            tracing::error!(schema = T::NAME, error = %e, "invalid schema declaration");
            panic!("invalid schema declaration for {}: {e}", T::NAME);
        }
    }
}

/// Composite layout of `parts` under the global registry's configuration.
///
/// # Panics
///
/// Panics if the parts together exceed the mask limit. Like a mis-declared
/// schema, that is caught the first time the composite is constructed.
pub fn composite_layout_of(name: &'static str, parts: &[&Schema]) -> CompositeLayout {
    match global().check_composite(name, parts) {
        Ok(layout) => layout,
        Err(e) => {
            tracing::error!(composite = name, error = %e, "invalid composite declaration");
            panic!("invalid composite declaration for {name}: {e}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::descriptor::FieldKind;
    use std::thread;

    struct Marker;

    impl Replicated for Marker {
        const NAME: &'static str = "marker";
        const FIELDS: &'static [FieldDescriptor] = &[
            FieldDescriptor::scalar("a", FieldKind::U32),
            FieldDescriptor::scalar("b", FieldKind::U64),
        ];
    }

    struct Broken;

    impl Replicated for Broken {
        const NAME: &'static str = "broken";
        const FIELDS: &'static [FieldDescriptor] = &[FieldDescriptor::scalar("a", FieldKind::U8)];
    }

    #[test]
    fn test_register_is_idempotent() {
        let registry = SchemaRegistry::new();
        assert!(registry.get::<Marker>().is_none());

        let first = registry.register::<Marker>().unwrap();
        let second = registry.register::<Marker>().unwrap();
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(registry.len(), 1);
        assert_eq!(first.total_blocks(), 3);
    }

    #[test]
    fn test_concurrent_first_use_compiles_once() {
        let registry = Arc::new(SchemaRegistry::new());
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let registry = Arc::clone(&registry);
                thread::spawn(move || registry.register::<Marker>().unwrap())
            })
            .collect();

        let schemas: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        for schema in &schemas[1..] {
            assert!(Arc::ptr_eq(&schemas[0], schema));
        }
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_broken_schema_is_not_stored() {
        let registry = SchemaRegistry::new();
        assert!(registry.register::<Broken>().is_err());
        assert!(registry.get::<Broken>().is_none());
        assert!(registry.is_empty());
    }

    #[test]
    #[should_panic(expected = "invalid schema declaration for broken")]
    fn test_schema_of_panics_on_broken_schema() {
        let _ = schema_of::<Broken>();
    }

    #[test]
    fn test_composite_limit() {
        let registry = SchemaRegistry::with_config(ReplicationConfig {
            max_mask_words: 1,
            ..ReplicationConfig::default()
        });
        let schema = registry.register::<Marker>().unwrap();
        let parts = [schema.as_ref(); 10];
        let layout = registry.check_composite("ten", &parts).unwrap();
        assert_eq!(layout.total_blocks(), 30);
        assert_eq!(layout.offset(9), Some(27));

        let parts = [schema.as_ref(); 11];
        assert!(registry.check_composite("eleven", &parts).is_err());
    }
}
