//! Binding a fixed collection for repeated operations.
//!
//! [`bind`] replaces the implicit receiver binding of dynamic collection
//! libraries: instead of a function remembering "the current collection",
//! callers hold a [`Bound`] value that carries the collection and the
//! classifier explicitly.

use crate::collect::collect_in;
use crate::collect_entries::collect_entries_in;
use crate::each::{each_in, Step};
use crate::error::IterError;
use crate::grep::grep_in;
use crate::shape::{Classifier, JsonClassifier};
use serde_json::Value;

/// A collection bound together with a classifier.
///
/// # Examples
///
/// ```
/// use json_each::{bind, Step};
/// use serde_json::json;
///
/// let scores = json!({"alice": 3, "bob": 7});
/// let scores = bind(&scores);
///
/// let high = scores.grep(|v, _key, _index| v.as_i64().unwrap() > 5);
/// assert_eq!(high, json!({"bob": 7}));
///
/// let doubled = scores.collect(|v, _key, _index| json!(v.as_i64().unwrap() * 2));
/// assert_eq!(doubled, json!({"alice": 6, "bob": 14}));
/// ```
pub struct Bound<'a, K = JsonClassifier> {
    collection: &'a Value,
    classifier: K,
}

/// Binds a collection for repeated operations, using the default
/// [`JsonClassifier`].
pub fn bind(collection: &Value) -> Bound<'_> {
    Bound {
        collection,
        classifier: JsonClassifier,
    }
}

impl<'a, K: Classifier> Bound<'a, K> {
    /// Replaces the classifier used for shape detection.
    ///
    /// ```
    /// use json_each::{bind, ArrayLikeClassifier, Step};
    /// use serde_json::json;
    ///
    /// let wrapper = json!({"0": "a", "length": 1});
    /// let mut visited = 0;
    /// bind(&wrapper)
    ///     .classified(ArrayLikeClassifier::default())
    ///     .each(|_v, _key, _index| {
    ///         visited += 1;
    ///         Step::Continue
    ///     });
    /// assert_eq!(visited, 1);
    /// ```
    pub fn classified<K2: Classifier>(self, classifier: K2) -> Bound<'a, K2> {
        Bound {
            collection: self.collection,
            classifier,
        }
    }

    /// The bound collection.
    pub fn collection(&self) -> &'a Value {
        self.collection
    }

    /// [`each`](crate::each()) against the bound collection.
    pub fn each<F>(&self, handler: F) -> &'a Value
    where
        F: FnMut(&Value, &str, usize) -> Step,
    {
        each_in(self.collection, &self.classifier, handler)
    }

    /// [`each_with`](crate::each_with()) against the bound collection.
    pub fn each_with<C, F>(&self, context: &mut C, mut handler: F) -> &'a Value
    where
        F: FnMut(&mut C, &Value, &str, usize) -> Step,
    {
        each_in(self.collection, &self.classifier, |value, key, index| {
            handler(context, value, key, index)
        })
    }

    /// [`grep`](crate::grep()) against the bound collection.
    pub fn grep<F, R>(&self, handler: F) -> Value
    where
        F: FnMut(&Value, &str, usize) -> R,
        R: Into<Value>,
    {
        grep_in(self.collection, &self.classifier, handler)
    }

    /// [`grep_with`](crate::grep_with()) against the bound collection.
    pub fn grep_with<C, F, R>(&self, context: &mut C, mut handler: F) -> Value
    where
        F: FnMut(&mut C, &Value, &str, usize) -> R,
        R: Into<Value>,
    {
        grep_in(self.collection, &self.classifier, |value, key, index| {
            handler(context, value, key, index)
        })
    }

    /// [`collect`](crate::collect()) against the bound collection.
    pub fn collect<F, R>(&self, handler: F) -> Value
    where
        F: FnMut(&Value, &str, usize) -> R,
        R: Into<Value>,
    {
        collect_in(self.collection, &self.classifier, handler)
    }

    /// [`collect_with`](crate::collect_with()) against the bound collection.
    pub fn collect_with<C, F, R>(&self, context: &mut C, mut handler: F) -> Value
    where
        F: FnMut(&mut C, &Value, &str, usize) -> R,
        R: Into<Value>,
    {
        collect_in(self.collection, &self.classifier, |value, key, index| {
            handler(context, value, key, index)
        })
    }

    /// [`collect_entries`](crate::collect_entries()) against the bound
    /// collection.
    pub fn collect_entries<F, R>(&self, handler: F) -> Result<Value, IterError>
    where
        F: FnMut(&Value, &str, usize) -> R,
        R: Into<Value>,
    {
        collect_entries_in(self.collection, &self.classifier, handler)
    }

    /// [`collect_entries_with`](crate::collect_entries_with()) against the
    /// bound collection.
    pub fn collect_entries_with<C, F, R>(
        &self,
        context: &mut C,
        mut handler: F,
    ) -> Result<Value, IterError>
    where
        F: FnMut(&mut C, &Value, &str, usize) -> R,
        R: Into<Value>,
    {
        collect_entries_in(self.collection, &self.classifier, |value, key, index| {
            handler(context, value, key, index)
        })
    }
}
