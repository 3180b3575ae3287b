//! Typed runtime dispatch.
//!
//! An [`Operation`] is a named callable holding an immutable catalog of
//! [`Signature`]s, built once at library-initialization time. Each call
//! resolves the runtime tag of every argument and invokes the first
//! registered signature whose tag tuple matches exactly; no widening or
//! coercion happens at the dispatch layer itself (coercion, where it
//! exists, lives inside a matched branch).
//!
//! A signature position may list several tags - the written alternation
//! form `"Array | Matrix"` - meaning any of them routes to the same
//! implementation.

use crate::error::{DispatchError, DispatchResult};
use crate::types::{type_of, TypeTag};
use crate::value::Value;

/// Implementation branch of an operation.
///
/// Branches receive the operation itself as an explicit first argument,
/// which is how the collection branch recurses into the same operation
/// for nested elements without any self-referential closure.
pub type ImplFn = fn(&Operation, &[Value]) -> DispatchResult<Value>;

/// A registered (tag-combination -> implementation) entry.
#[derive(Debug, Clone)]
pub struct Signature {
    /// One alternation set per parameter position
    params: Vec<Vec<TypeTag>>,
    func: ImplFn,
}

impl Signature {
    pub fn new(params: Vec<Vec<TypeTag>>, func: ImplFn) -> Signature {
        debug_assert!(!params.is_empty(), "signatures have arity >= 1");
        debug_assert!(
            params.iter().all(|set| !set.is_empty()),
            "every parameter position needs at least one tag"
        );
        Signature { params, func }
    }

    /// Parse the written signature form, e.g. `"Array | Matrix"` or
    /// `"number, number"`: commas separate parameter positions, `|`
    /// separates alternated tags within one position.
    ///
    /// Fails with [`DispatchError::UnsupportedType`] if any name is not
    /// a recognized tag.
    pub fn parse(text: &str, func: ImplFn) -> DispatchResult<Signature> {
        let params = text
            .split(',')
            .map(|param| {
                param
                    .split('|')
                    .map(|name| TypeTag::from_name(name.trim()))
                    .collect::<DispatchResult<Vec<TypeTag>>>()
            })
            .collect::<DispatchResult<Vec<Vec<TypeTag>>>>()?;
        Ok(Signature::new(params, func))
    }

    /// Number of parameter positions.
    pub fn arity(&self) -> usize {
        self.params.len()
    }

    /// Exact-tag match of a resolved tag tuple against this signature.
    fn matches(&self, tags: &[TypeTag]) -> bool {
        tags.len() == self.params.len()
            && self
                .params
                .iter()
                .zip(tags)
                .all(|(set, tag)| set.contains(tag))
    }

    /// True if both signatures can match some common tag tuple.
    fn overlaps(&self, other: &Signature) -> bool {
        self.params.len() == other.params.len()
            && self
                .params
                .iter()
                .zip(&other.params)
                .all(|(a, b)| a.iter().any(|t| b.contains(t)))
    }
}

/// A named operation with an immutable signature catalog.
///
/// Operations are created once (typically inside a `Lazy` static) and
/// live for the process lifetime. Apart from branches that read the
/// global configuration, a call is a pure function of its arguments.
#[derive(Debug, Clone)]
pub struct Operation {
    name: &'static str,
    signatures: Vec<Signature>,
    /// Inert display-formatting metadata (e.g. a LaTeX template).
    /// Consumed by rendering collaborators; never interpreted here.
    latex: Option<String>,
}

impl Operation {
    /// Start building an operation. Register signatures with
    /// [`signature`](Operation::signature) or [`unary`](Operation::unary);
    /// the catalog is fixed once the value is stored.
    pub fn new(name: &'static str) -> Operation {
        Operation {
            name,
            signatures: Vec::new(),
            latex: None,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn latex(&self) -> Option<&str> {
        self.latex.as_deref()
    }

    /// Attach display-formatting metadata.
    pub fn with_latex<S: Into<String>>(mut self, template: S) -> Operation {
        self.latex = Some(template.into());
        self
    }

    /// Register a signature: one alternation set per parameter position.
    pub fn signature(mut self, params: &[&[TypeTag]], func: ImplFn) -> Operation {
        let sig = Signature::new(params.iter().map(|set| set.to_vec()).collect(), func);
        debug_assert!(
            !self.signatures.iter().any(|s| s.overlaps(&sig)),
            "operation {}: overlapping signature registration",
            self.name
        );
        self.signatures.push(sig);
        self
    }

    /// Register a unary signature whose single position accepts any of
    /// the given tags.
    pub fn unary(self, tags: &[TypeTag], func: ImplFn) -> Operation {
        self.signature(&[tags], func)
    }

    /// Register a signature from its written form (see [`Signature::parse`]).
    pub fn parse_signature(mut self, text: &str, func: ImplFn) -> DispatchResult<Operation> {
        let sig = Signature::parse(text, func)?;
        debug_assert!(
            !self.signatures.iter().any(|s| s.overlaps(&sig)),
            "operation {}: overlapping signature registration",
            self.name
        );
        self.signatures.push(sig);
        Ok(self)
    }

    /// Invoke the operation: resolve each argument's tag and run the
    /// first matching signature in registration order.
    pub fn call(&self, args: &[Value]) -> DispatchResult<Value> {
        let tags: Vec<TypeTag> = args.iter().map(type_of).collect();
        for sig in &self.signatures {
            if sig.matches(&tags) {
                return (sig.func)(self, args);
            }
        }
        Err(DispatchError::no_matching_signature(self.name, tags))
    }

    /// Unary convenience for [`call`](Operation::call).
    pub fn call1(&self, x: &Value) -> DispatchResult<Value> {
        self.call(std::slice::from_ref(x))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn echo_tag(op: &Operation, args: &[Value]) -> DispatchResult<Value> {
        let _ = op;
        Ok(Value::from(args[0].type_name()))
    }

    fn echo_bool(op: &Operation, args: &[Value]) -> DispatchResult<Value> {
        let _ = (op, args);
        Ok(Value::Bool(true))
    }

    #[test]
    fn test_exact_tag_match() {
        let op = Operation::new("probe")
            .unary(&[TypeTag::Number], echo_tag)
            .unary(&[TypeTag::Str], echo_bool);
        assert_eq!(op.call1(&Value::Number(1.0)).unwrap(), Value::from("number"));
        assert_eq!(op.call1(&Value::from("x")).unwrap(), Value::Bool(true));
    }

    #[test]
    fn test_no_widening_across_tags() {
        // A boolean is not dispatched to the number branch
        let op = Operation::new("probe").unary(&[TypeTag::Number], echo_tag);
        let err = op.call1(&Value::Bool(true)).unwrap_err();
        assert_eq!(
            err,
            DispatchError::no_matching_signature("probe", vec![TypeTag::Boolean])
        );
    }

    #[test]
    fn test_alternation_routes_to_one_branch() {
        let op = Operation::new("probe").unary(&[TypeTag::Boolean, TypeTag::Str], echo_tag);
        assert_eq!(op.call1(&Value::Bool(false)).unwrap(), Value::from("boolean"));
        assert_eq!(op.call1(&Value::from("s")).unwrap(), Value::from("string"));
        assert!(op.call1(&Value::Number(0.0)).is_err());
    }

    #[test]
    fn test_arity_must_match() {
        let op = Operation::new("probe").unary(&[TypeTag::Number], echo_tag);
        let args = vec![Value::Number(1.0), Value::Number(2.0)];
        let err = op.call(&args).unwrap_err();
        assert!(matches!(err, DispatchError::NoMatchingSignature { .. }));
    }

    #[test]
    fn test_parse_signature_alternation() {
        let sig = Signature::parse("Array | Matrix", echo_tag).unwrap();
        assert_eq!(sig.arity(), 1);
        assert!(sig.matches(&[TypeTag::Array]));
        assert!(sig.matches(&[TypeTag::Matrix]));
        assert!(!sig.matches(&[TypeTag::Number]));
    }

    #[test]
    fn test_parse_signature_multi_param() {
        let sig = Signature::parse("number, boolean | string", echo_tag).unwrap();
        assert_eq!(sig.arity(), 2);
        assert!(sig.matches(&[TypeTag::Number, TypeTag::Boolean]));
        assert!(sig.matches(&[TypeTag::Number, TypeTag::Str]));
        assert!(!sig.matches(&[TypeTag::Number, TypeTag::Number]));
        assert!(!sig.matches(&[TypeTag::Number]));
    }

    #[test]
    fn test_parse_signature_unknown_tag() {
        let err = Signature::parse("Quaternion", echo_tag).unwrap_err();
        assert!(matches!(err, DispatchError::UnsupportedType { .. }));
    }

    #[test]
    fn test_parse_signature_registration() {
        let op = Operation::new("probe")
            .parse_signature("boolean | string", echo_tag)
            .unwrap();
        assert_eq!(op.call1(&Value::Bool(true)).unwrap(), Value::from("boolean"));
        assert!(Operation::new("probe")
            .parse_signature("Tensor", echo_tag)
            .is_err());
    }

    #[test]
    fn test_latex_metadata_is_inert() {
        let op = Operation::new("probe")
            .unary(&[TypeTag::Number], echo_tag)
            .with_latex("+\\left(${args[0]}\\right)");
        assert_eq!(op.latex(), Some("+\\left(${args[0]}\\right)"));
        // Metadata does not affect dispatch
        assert!(op.call1(&Value::Number(1.0)).is_ok());
    }
}
