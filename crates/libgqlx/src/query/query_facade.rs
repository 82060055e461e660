use crate::QueryError;
use crate::Schema;
use crate::paths;
use crate::paths::PathFinder;
use crate::predicate::ArgumentPredicate;
use crate::predicate::EnumValuePredicate;
use crate::predicate::FieldPredicate;
use crate::predicate::NameMatcher;
use crate::predicate::Nullability;
use crate::predicate::TypePredicate;
use crate::query::ArgInfo;
use crate::query::ArgsQuery;
use crate::query::FieldInfo;
use crate::query::FieldsQuery;
use crate::query::PathInfo;
use crate::query::PathsQuery;
use crate::query::ReferenceInfo;
use crate::query::ReferenceKind;
use crate::query::ReferencesQuery;
use crate::query::TypeInfo;
use crate::query::TypesQuery;
use crate::query::ValueInfo;
use crate::query::ValuesQuery;
use crate::query::options::parse_field_spec;
use crate::suggest;
use crate::types::FieldEdge;
use crate::types::TypeKind;
use crate::types::TypeNode;
use crate::usage::UsageFilter;
use crate::usage::UsageIndex;
use crate::usage::UsageRelation;

type Result<T> = std::result::Result<T, QueryError>;

/// Entry point for every query against one loaded [`Schema`].
///
/// Each method takes an immutable options record, validates it (option
/// consistency first, then the existence of every type and field it names)
/// and only then walks the schema. Results are fully ordered, so running the
/// same query twice yields identical output.
#[derive(Clone, Copy, Debug)]
pub struct QueryFacade<'schema> {
    schema: &'schema Schema,
    usage_index: UsageIndex<'schema>,
}
impl<'schema> QueryFacade<'schema> {
    pub fn new(schema: &'schema Schema) -> Self {
        Self {
            schema,
            usage_index: UsageIndex::new(schema),
        }
    }

    /// Lists arguments of one field (`Type.field`) or of every field of
    /// every type.
    pub fn args(&self, query: &ArgsQuery) -> Result<Vec<ArgInfo>> {
        let nullability = Nullability::from_flags(query.required, query.nullable)?;
        let name = NameMatcher::new(query.name_glob.as_deref(), query.name_regex.as_deref())?;
        let field_spec = query.field.as_deref()
            .map(parse_field_spec)
            .transpose()?;

        let predicate = ArgumentPredicate::new()
            .with_deprecated(query.deprecated)
            .with_has_description(query.has_description)
            .with_name_matcher(name)
            .with_nullability(nullability)
            .with_type_name(query.type_name.to_owned());

        let args: Vec<ArgInfo> = match field_spec {
            Some((type_name, field_name)) => {
                let field = self.require_field(type_name, field_name)?;
                field.arguments().iter()
                    .filter(|arg| predicate.matches(arg))
                    .map(|arg| ArgInfo::from_argument(field, arg, false))
                    .collect()
            },

            None => self.schema.types_sorted_by_name().into_iter()
                .flat_map(TypeNode::fields)
                .flat_map(|field| field.arguments().iter().map(move |arg| (field, arg)))
                .filter(|(_, arg)| predicate.matches(arg))
                .map(|(field, arg)| ArgInfo::from_argument(field, arg, true))
                .collect(),
        };

        log::debug!("Matched {} argument(s).", args.len());
        Ok(args)
    }

    /// Lists fields of one type, or of every type (ordered by type name).
    pub fn fields(&self, query: &FieldsQuery) -> Result<Vec<FieldInfo>> {
        let nullability = Nullability::from_flags(query.required, query.nullable)?;
        let name = NameMatcher::new(query.name_glob.as_deref(), query.name_regex.as_deref())?;

        let predicate = FieldPredicate::new()
            .with_deprecated(query.deprecated)
            .with_has_arguments(query.has_args.to_owned())
            .with_has_description(query.has_description)
            .with_name_matcher(name)
            .with_nullability(nullability)
            .with_returns(query.returns.to_owned());

        let fields: Vec<FieldInfo> = match &query.type_name {
            Some(type_name) => self.schema.require_type(type_name, "type")?
                .fields()
                .filter(|field| predicate.matches(field))
                .map(|field| FieldInfo::from_field(field, false))
                .collect(),

            None => self.schema.types_sorted_by_name().into_iter()
                .flat_map(TypeNode::fields)
                .filter(|field| predicate.matches(field))
                .map(|field| FieldInfo::from_field(field, true))
                .collect(),
        };

        log::debug!("Matched {} field(s).", fields.len());
        Ok(fields)
    }

    /// Finds reachability paths to `query.target`, then applies the
    /// `through` and `shortest` post-filters in that order.
    pub fn paths(&self, query: &PathsQuery) -> Result<Vec<PathInfo>> {
        let from_type = query.from.as_deref()
            .unwrap_or_else(|| self.schema.query_type_name());

        self.schema.require_type(query.target.as_str(), "type")?;
        self.schema.require_type(from_type, "type")?;
        if let Some(through) = &query.through {
            self.schema.require_type(through, "type")?;
        }

        let mut found = PathFinder::new(self.schema)
            .with_max_depth(query.max_depth)
            .find_paths(from_type, query.target.as_str())?;

        if let Some(through) = &query.through {
            paths::retain_through(&mut found, through);
        }
        if query.shortest {
            paths::retain_shortest(&mut found);
        }

        Ok(found.iter().map(PathInfo::from).collect())
    }

    /// Lists every field returning `query.target` and every argument typed
    /// as `query.target`.
    pub fn references(&self, query: &ReferencesQuery) -> Result<Vec<ReferenceInfo>> {
        self.schema.require_type(query.target.as_str(), "type")?;
        if let Some(in_type) = &query.in_type {
            self.schema.require_type(in_type, "type")?;
        }

        let wants = |kind: ReferenceKind| query.kind.is_none_or(|wanted| wanted == kind);
        let mut refs = vec![];
        let declaring_types = self.schema.types_sorted_by_name().into_iter()
            .filter(|type_node| {
                query.in_type.as_deref().is_none_or(|in_type| type_node.name() == in_type)
            });

        for type_node in declaring_types {
            for field in type_node.fields() {
                if wants(ReferenceKind::Field) && field.return_type_name() == query.target {
                    refs.push(ReferenceInfo {
                        location: format!("{}.{}", type_node.name(), field.name()),
                        kind: ReferenceKind::Field,
                        type_annotation: field.type_annotation().to_string(),
                        description: field.description().map(str::to_string),
                    });
                }

                if !wants(ReferenceKind::Argument) {
                    continue;
                }
                for arg in field.arguments() {
                    if arg.type_annotation().innermost_type_name() == query.target {
                        refs.push(ReferenceInfo {
                            location: format!(
                                "{}.{}.{}",
                                type_node.name(),
                                field.name(),
                                arg.name(),
                            ),
                            kind: ReferenceKind::Argument,
                            type_annotation: arg.type_annotation().to_string(),
                            description: arg.description().map(str::to_string),
                        });
                    }
                }
            }
        }

        log::debug!("Found {} reference(s) to `{}`.", refs.len(), query.target);
        Ok(refs)
    }

    pub fn schema(&self) -> &'schema Schema {
        self.schema
    }

    /// Lists the types matching every requested dimension, ordered by name.
    pub fn types(&self, query: &TypesQuery) -> Result<Vec<TypeInfo>> {
        let name = NameMatcher::new(query.name_glob.as_deref(), query.name_regex.as_deref())?;

        if let Some(iface_name) = &query.implements {
            self.schema.require_type_of_kind(iface_name, TypeKind::Interface)?;
        }

        let usage_dimensions = [
            (UsageRelation::UsedByAll, &query.used_by),
            (UsageRelation::UsedByAny, &query.used_by_any),
            (UsageRelation::NotUsedByAny, &query.not_used_by),
            (UsageRelation::NotUsedByAll, &query.not_used_by_all),
        ];
        let mut predicate = TypePredicate::new()
            .with_has_description(query.has_description)
            .with_has_fields(query.has_fields.to_owned())
            .with_implements(query.implements.to_owned())
            .with_kinds(query.kinds.iter().copied())
            .with_name_matcher(name);
        for (relation, reference_type_names) in usage_dimensions {
            predicate = predicate.with_usage_filter(UsageFilter::build(
                &self.usage_index,
                relation,
                reference_type_names,
            )?);
        }

        let types: Vec<TypeInfo> = self.schema.types_sorted_by_name().into_iter()
            .filter(|type_node| predicate.matches(type_node))
            .map(TypeInfo::from_type_node)
            .collect();

        log::debug!("Matched {} type(s).", types.len());
        Ok(types)
    }

    /// Lists enum values of one enum or of every enum (ordered by enum name).
    pub fn values(&self, query: &ValuesQuery) -> Result<Vec<ValueInfo>> {
        let predicate = EnumValuePredicate::new()
            .with_deprecated(query.deprecated)
            .with_has_description(query.has_description);

        let enum_types: Vec<&TypeNode> = match &query.enum_name {
            Some(enum_name) =>
                vec![self.schema.require_type_of_kind(enum_name, TypeKind::Enum)?],
            None => self.schema.types_sorted_by_name().into_iter()
                .filter(|type_node| type_node.kind() == TypeKind::Enum)
                .collect(),
        };

        let qualified = query.enum_name.is_none();
        let values: Vec<ValueInfo> = enum_types.into_iter()
            .flat_map(|enum_type| {
                enum_type.enum_values().iter()
                    .filter(move |value| predicate.matches(value))
                    .map(move |value| ValueInfo::from_enum_value(
                        enum_type.name(),
                        value,
                        qualified,
                    ))
            })
            .collect();

        log::debug!("Matched {} enum value(s).", values.len());
        Ok(values)
    }

    fn require_field(
        &self,
        type_name: &str,
        field_name: &str,
    ) -> Result<&'schema FieldEdge> {
        let type_node = self.schema.require_type(type_name, "type")?;
        type_node.field(field_name).ok_or_else(|| QueryError::UnknownField {
            type_name: type_name.to_string(),
            field_name: field_name.to_string(),
            suggestion: suggest::find_closest(field_name, type_node.field_names()),
        })
    }
}
