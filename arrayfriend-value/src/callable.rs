use std::rc::Rc;

use crate::Value;

type Function = dyn Fn(&[Value]) -> Value;

/// A callable value.
///
/// Callables are opaque: they are copied by reference and two callables are
/// strictly equal only when they are the same function.
#[derive(Clone)]
pub struct Callable {
    name: Rc<str>,
    function: Rc<Function>,
}

impl Callable {
    pub fn new(name: impl Into<Rc<str>>, function: impl Fn(&[Value]) -> Value + 'static) -> Self {
        Self {
            name: name.into(),
            function: Rc::new(function),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn call(&self, arguments: &[Value]) -> Value {
        (self.function)(arguments)
    }

    pub fn ptr_eq(&self, other: &Callable) -> bool {
        self.address() == other.address()
    }

    // compare data pointers only; vtable pointers are not unique
    pub(crate) fn address(&self) -> usize {
        Rc::as_ptr(&self.function) as *const () as usize
    }
}

impl PartialEq for Callable {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl std::fmt::Display for Callable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "function {}() {{ [native code] }}", self.name)
    }
}

impl std::fmt::Debug for Callable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Callable").field(&self.name).finish()
    }
}
