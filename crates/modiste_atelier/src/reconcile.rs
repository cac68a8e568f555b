//! Class reconciliation.
//!
//! Entry point of the directive. The host calls it on `bind` and on every
//! `update` of an element carrying `v-mods`, `v-is` or `v-bem`.

use modiste_carton::{camelize, hyphenate};
use serde_json::Value;

use crate::class_list::ClassList;
use crate::class_name::build_class_name;
use crate::errors::ModifierError;
use crate::mode::{DirectiveModifiers, ModifierMode};
use crate::options::ModifierOptions;
use crate::state::{is_truthy, StateLookup};
use crate::value::DirectiveValue;

/// Result of one invocation, as seen by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i8)]
pub enum Status {
    Ok = 0,
    Failed = -1,
}

impl Status {
    #[inline]
    pub fn code(self) -> i8 {
        self as i8
    }

    #[inline]
    pub fn is_ok(self) -> bool {
        self == Self::Ok
    }
}

/// Directive binding of one invocation
#[derive(Debug, Clone, Copy, Default)]
pub struct DirectiveBinding<'a> {
    /// Name the directive was registered under, without `v-`
    pub name: &'a str,
    /// Explicit BEM base class (`v-bem:navbar`)
    pub arg: Option<&'a str>,
    pub modifiers: DirectiveModifiers,
    /// Current value, `None` when undefined
    pub value: Option<&'a Value>,
    /// Value of the previous invocation, `None` on bind
    pub old_value: Option<&'a Value>,
}

/// Rendered class information of the element being patched
#[derive(Debug, Clone, Copy, Default)]
pub struct VNodeClasses<'a> {
    /// Class attribute as it was rendered before this patch
    pub prev_class: Option<&'a str>,
    /// `:class` declaration of the new vnode
    pub binding: Option<&'a Value>,
    /// `:class` declaration of the old vnode
    pub old_binding: Option<&'a Value>,
}

/// The modifier directive
#[derive(Debug, Clone, Default)]
pub struct ModifierDirective {
    options: ModifierOptions,
}

impl ModifierDirective {
    pub fn new(options: ModifierOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ModifierOptions {
        &self.options
    }

    /// Names to register the directive under: generic, forced `is-`, BEM
    pub fn registered_names(&self) -> [&str; 3] {
        [
            self.options.directive_name.as_str(),
            self.options.is_directive_name.as_str(),
            self.options.bem_directive_name.as_str(),
        ]
    }

    /// `bind` hook: first invocation, there is no previous value
    pub fn bind<L, S>(
        &self,
        el: &mut L,
        binding: DirectiveBinding<'_>,
        vnode: &VNodeClasses<'_>,
        state: &S,
    ) -> Status
    where
        L: ClassList + ?Sized,
        S: StateLookup + ?Sized,
    {
        let binding = DirectiveBinding {
            old_value: None,
            ..binding
        };
        self.apply(el, &binding, vnode, state)
    }

    /// `update` hook
    pub fn update<L, S>(
        &self,
        el: &mut L,
        binding: &DirectiveBinding<'_>,
        vnode: &VNodeClasses<'_>,
        state: &S,
    ) -> Status
    where
        L: ClassList + ?Sized,
        S: StateLookup + ?Sized,
    {
        self.apply(el, binding, vnode, state)
    }

    /// Reconcile the element's classes and report failures as a [`Status`].
    ///
    /// Failures are logged and passed to [`ModifierOptions::on_error`]; they
    /// never propagate to the caller.
    pub fn apply<L, S>(
        &self,
        el: &mut L,
        binding: &DirectiveBinding<'_>,
        vnode: &VNodeClasses<'_>,
        state: &S,
    ) -> Status
    where
        L: ClassList + ?Sized,
        S: StateLookup + ?Sized,
    {
        match self.try_apply(el, binding, vnode, state) {
            Ok(()) => Status::Ok,
            Err(err) => {
                if let Some(on_error) = self.options.on_error {
                    on_error(&err);
                }
                tracing::error!(
                    target: "modiste",
                    directive = binding.name,
                    code = err.code(),
                    "[modiste]: {}",
                    err
                );
                Status::Failed
            }
        }
    }

    /// Reconcile the element's classes.
    ///
    /// Nothing is mutated when the value fails validation. With a list of
    /// names, classes of names before the failing one stay applied.
    pub fn try_apply<L, S>(
        &self,
        el: &mut L,
        binding: &DirectiveBinding<'_>,
        vnode: &VNodeClasses<'_>,
        state: &S,
    ) -> Result<(), ModifierError>
    where
        L: ClassList + ?Sized,
        S: StateLookup + ?Sized,
    {
        let value = DirectiveValue::from_binding(binding.name, binding.value)?;
        let mode = ModifierMode::resolve(binding.name, binding.modifiers, &self.options);

        tracing::trace!(
            directive = binding.name,
            kind = value.kind(),
            ?mode,
            "applying modifiers"
        );

        match value {
            DirectiveValue::Name(name) => {
                self.set_class_by_name(el, name, mode, binding, vnode, state)
            }
            DirectiveValue::Names(names) => {
                for name in names {
                    self.set_class_by_name(el, name, mode, binding, vnode, state)?;
                }
                Ok(())
            }
            DirectiveValue::Flags(flags) => {
                let classes_unchanged = same_classes(vnode.binding, vnode.old_binding);

                for (key, add) in flags {
                    if is_unchanged(binding.old_value, key, add)
                        && (!mode.is_bem() || classes_unchanged)
                    {
                        tracing::trace!(key, "modifier unchanged, skipping");
                        continue;
                    }
                    self.set_class(el, &hyphenate(key), add, mode, binding, vnode);
                }
                Ok(())
            }
        }
    }

    /// Toggle the class of `name` from the state property `nameInCamelCase`
    fn set_class_by_name<L, S>(
        &self,
        el: &mut L,
        name: &str,
        mode: ModifierMode,
        binding: &DirectiveBinding<'_>,
        vnode: &VNodeClasses<'_>,
        state: &S,
    ) -> Result<(), ModifierError>
    where
        L: ClassList + ?Sized,
        S: StateLookup + ?Sized,
    {
        let property = camelize(name);
        let add = match state.get(&property) {
            None | Some(Value::Null) => return Err(ModifierError::MissingProperty { property }),
            Some(value) => is_truthy(value),
        };

        self.set_class(el, name, add, mode, binding, vnode);
        Ok(())
    }

    fn set_class<L>(
        &self,
        el: &mut L,
        name: &str,
        add: bool,
        mode: ModifierMode,
        binding: &DirectiveBinding<'_>,
        vnode: &VNodeClasses<'_>,
    ) where
        L: ClassList + ?Sized,
    {
        let Some(class) =
            build_class_name(name, mode, binding.arg, vnode.prev_class, &self.options)
        else {
            tracing::debug!(
                directive = binding.name,
                modifier = name,
                base = binding.arg,
                "no base class rendered, skipping modifier"
            );
            return;
        };

        set_elem_class(el, &class, add);
    }
}

/// Add or remove one class
pub fn set_elem_class<L: ClassList + ?Sized>(el: &mut L, class: &str, add: bool) {
    tracing::trace!(class, add, "toggling class");
    if add {
        el.add(class);
    } else {
        el.remove(class);
    }
}

/// Whether the flag of `key` is the same as in the previous value
fn is_unchanged(old_value: Option<&Value>, key: &str, add: bool) -> bool {
    old_value
        .and_then(Value::as_object)
        .and_then(|old| old.get(key))
        .and_then(Value::as_bool)
        == Some(add)
}

/// Compare the `:class` declarations of two renders of the same element.
///
/// In BEM mode the base class is discovered from the other classes of the
/// element, so a modifier whose own flag did not change may still need to be
/// recomputed. This tells whether those classes changed.
pub fn same_classes(current: Option<&Value>, previous: Option<&Value>) -> bool {
    let (Some(current), Some(previous)) = (current, previous) else {
        return false;
    };

    match (current, previous) {
        (Value::String(current), Value::String(previous)) => {
            !current.is_empty() && current == previous
        }
        (Value::Array(current), Value::Array(previous)) => {
            current.len() == previous.len()
                && current.iter().all(|class| previous.contains(class))
                && previous.iter().all(|class| current.contains(class))
        }
        (Value::Object(current), Value::Object(previous)) => {
            current.len() == previous.len()
                && current
                    .iter()
                    .all(|(key, value)| previous.get(key) == Some(value))
        }
        _ => false,
    }
}
