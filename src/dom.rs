//! In-memory document model for the estimator page.
//!
//! Holds the handful of element kinds the form uses (text input, radio button,
//! select, plain block) in document order. Every method takes `&self`; the
//! element list sits behind a lock so handler futures stay `Send` and each
//! read or write is atomic.

use crate::error::AppError;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// An `<option>` of a select control
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    /// Option whose value and label are both `name`
    pub fn named(name: &str) -> Self {
        Self {
            value: name.to_string(),
            label: name.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ElementKind {
    TextInput {
        value: String,
    },
    Radio {
        name: String,
        value: String,
        checked: bool,
    },
    Select {
        options: Vec<SelectOption>,
        selected: Option<usize>,
    },
    Block {
        text: String,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub id: Option<String>,
    pub kind: ElementKind,
    pub visible: bool,
}

impl Element {
    pub fn text_input(id: &str) -> Self {
        Self {
            id: Some(id.to_string()),
            kind: ElementKind::TextInput {
                value: String::new(),
            },
            visible: true,
        }
    }

    pub fn radio(name: &str, value: &str) -> Self {
        Self {
            id: None,
            kind: ElementKind::Radio {
                name: name.to_string(),
                value: value.to_string(),
                checked: false,
            },
            visible: true,
        }
    }

    pub fn select(id: &str) -> Self {
        Self {
            id: Some(id.to_string()),
            kind: ElementKind::Select {
                options: Vec::new(),
                selected: None,
            },
            visible: true,
        }
    }

    pub fn block(id: &str, visible: bool) -> Self {
        Self {
            id: Some(id.to_string()),
            kind: ElementKind::Block {
                text: String::new(),
            },
            visible,
        }
    }
}

/// Snapshot of one radio button in a group
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RadioButton {
    pub value: String,
    pub checked: bool,
}

#[derive(Debug, Default)]
pub struct Document {
    elements: RwLock<Vec<Element>>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an element at the end of the document.
    pub fn append(&self, element: Element) {
        self.write().push(element);
    }

    pub fn contains(&self, id: &str) -> bool {
        self.read().iter().any(|e| e.id.as_deref() == Some(id))
    }

    /// Fail with `ElementNotFound` unless an element with `id` exists.
    pub fn require(&self, id: &str) -> Result<(), AppError> {
        if self.contains(id) {
            Ok(())
        } else {
            Err(AppError::ElementNotFound(id.to_string()))
        }
    }

    /// All radio buttons named `name`, in document order
    pub fn elements_by_name(&self, name: &str) -> Vec<RadioButton> {
        self.read()
            .iter()
            .filter_map(|e| match &e.kind {
                ElementKind::Radio {
                    name: n,
                    value,
                    checked,
                } if n == name => Some(RadioButton {
                    value: value.clone(),
                    checked: *checked,
                }),
                _ => None,
            })
            .collect()
    }

    /// Check the radio with `value` in group `name`, unchecking the rest.
    ///
    /// Returns false (and changes nothing) if no such radio exists.
    pub fn check_radio(&self, name: &str, value: &str) -> bool {
        let mut elements = self.write();
        let exists = elements.iter().any(|e| {
            matches!(&e.kind, ElementKind::Radio { name: n, value: v, .. } if n == name && v == value)
        });
        if !exists {
            return false;
        }

        for element in elements.iter_mut() {
            if let ElementKind::Radio {
                name: n,
                value: v,
                checked,
            } = &mut element.kind
            {
                if n == name {
                    *checked = v == value;
                }
            }
        }
        true
    }

    /// Uncheck every radio in group `name`.
    pub fn clear_radio_group(&self, name: &str) {
        for element in self.write().iter_mut() {
            if let ElementKind::Radio { name: n, checked, .. } = &mut element.kind {
                if n == name {
                    *checked = false;
                }
            }
        }
    }

    /// Current value of a text input or select.
    ///
    /// A select reports its selected option, or its first option when nothing
    /// was picked explicitly, or the empty string when it has no options.
    pub fn value(&self, id: &str) -> Result<String, AppError> {
        self.with_element(id, |element| match &element.kind {
            ElementKind::TextInput { value } => value.clone(),
            ElementKind::Select { options, selected } => options
                .get(selected.unwrap_or(0))
                .map(|o| o.value.clone())
                .unwrap_or_default(),
            ElementKind::Radio { value, .. } => value.clone(),
            ElementKind::Block { .. } => String::new(),
        })
    }

    pub fn set_value(&self, id: &str, value: &str) -> Result<(), AppError> {
        self.with_element_mut(id, |element| {
            if let ElementKind::TextInput { value: v } = &mut element.kind {
                *v = value.to_string();
            }
        })
    }

    /// Select the option with `value`. Returns false if the select has no such option.
    pub fn select_option(&self, id: &str, value: &str) -> Result<bool, AppError> {
        self.with_element_mut(id, |element| match &mut element.kind {
            ElementKind::Select { options, selected } => {
                match options.iter().position(|o| o.value == value) {
                    Some(index) => {
                        *selected = Some(index);
                        true
                    }
                    None => false,
                }
            }
            _ => false,
        })
    }

    pub fn options(&self, id: &str) -> Result<Vec<SelectOption>, AppError> {
        self.with_element(id, |element| match &element.kind {
            ElementKind::Select { options, .. } => options.clone(),
            _ => Vec::new(),
        })
    }

    /// Drop every option of a select and append `options` in order.
    pub fn replace_options(&self, id: &str, options: Vec<SelectOption>) -> Result<(), AppError> {
        self.with_element_mut(id, |element| {
            if let ElementKind::Select {
                options: current,
                selected,
            } = &mut element.kind
            {
                *current = options;
                *selected = None;
            }
        })
    }

    pub fn is_visible(&self, id: &str) -> Result<bool, AppError> {
        self.with_element(id, |element| element.visible)
    }

    pub fn set_visible(&self, id: &str, visible: bool) -> Result<(), AppError> {
        self.with_element_mut(id, |element| element.visible = visible)
    }

    pub fn text(&self, id: &str) -> Result<String, AppError> {
        self.with_element(id, |element| match &element.kind {
            ElementKind::Block { text } => text.clone(),
            _ => String::new(),
        })
    }

    pub fn set_text(&self, id: &str, text: &str) -> Result<(), AppError> {
        self.with_element_mut(id, |element| {
            if let ElementKind::Block { text: t } = &mut element.kind {
                *t = text.to_string();
            }
        })
    }

    fn with_element<T>(&self, id: &str, f: impl FnOnce(&Element) -> T) -> Result<T, AppError> {
        let elements = self.read();
        elements
            .iter()
            .find(|e| e.id.as_deref() == Some(id))
            .map(f)
            .ok_or_else(|| AppError::ElementNotFound(id.to_string()))
    }

    fn with_element_mut<T>(
        &self,
        id: &str,
        f: impl FnOnce(&mut Element) -> T,
    ) -> Result<T, AppError> {
        let mut elements = self.write();
        elements
            .iter_mut()
            .find(|e| e.id.as_deref() == Some(id))
            .map(f)
            .ok_or_else(|| AppError::ElementNotFound(id.to_string()))
    }

    fn read(&self) -> RwLockReadGuard<'_, Vec<Element>> {
        self.elements.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<Element>> {
        self.elements.write().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_document() -> Document {
        let doc = Document::new();
        doc.append(Element::text_input("sqft"));
        doc.append(Element::radio("rooms", "1"));
        doc.append(Element::radio("rooms", "2"));
        doc.append(Element::select("city"));
        doc.append(Element::block("result", false));
        doc
    }

    #[test]
    fn test_missing_element_is_reported() {
        let doc = sample_document();
        assert!(matches!(
            doc.value("nope"),
            Err(AppError::ElementNotFound(id)) if id == "nope"
        ));
        assert!(doc.set_visible("nope", true).is_err());
        assert!(doc.require("result").is_ok());
    }

    #[test]
    fn test_check_radio_is_exclusive() {
        let doc = sample_document();
        assert!(doc.check_radio("rooms", "1"));
        assert!(doc.check_radio("rooms", "2"));

        let group = doc.elements_by_name("rooms");
        assert_eq!(group.len(), 2);
        assert!(!group[0].checked);
        assert!(group[1].checked);

        assert!(!doc.check_radio("rooms", "7"));
        assert!(doc.elements_by_name("rooms")[1].checked);

        doc.clear_radio_group("rooms");
        assert!(doc.elements_by_name("rooms").iter().all(|r| !r.checked));
    }

    #[test]
    fn test_select_value_defaults_to_first_option() {
        let doc = sample_document();
        assert_eq!(doc.value("city").unwrap(), "");

        doc.replace_options(
            "city",
            vec![SelectOption::named("A"), SelectOption::named("B")],
        )
        .unwrap();
        assert_eq!(doc.value("city").unwrap(), "A");

        assert!(doc.select_option("city", "B").unwrap());
        assert_eq!(doc.value("city").unwrap(), "B");
        assert!(!doc.select_option("city", "C").unwrap());
    }

    #[test]
    fn test_replace_options_resets_selection() {
        let doc = sample_document();
        doc.replace_options("city", vec![SelectOption::named("A"), SelectOption::named("B")])
            .unwrap();
        doc.select_option("city", "B").unwrap();

        doc.replace_options("city", vec![SelectOption::named("C")]).unwrap();
        assert_eq!(doc.options("city").unwrap(), vec![SelectOption::named("C")]);
        assert_eq!(doc.value("city").unwrap(), "C");
    }

    #[test]
    fn test_text_and_visibility() {
        let doc = sample_document();
        assert!(!doc.is_visible("result").unwrap());
        doc.set_text("result", "hello").unwrap();
        doc.set_visible("result", true).unwrap();
        assert_eq!(doc.text("result").unwrap(), "hello");
        assert!(doc.is_visible("result").unwrap());

        doc.set_value("sqft", "1200").unwrap();
        assert_eq!(doc.value("sqft").unwrap(), "1200");
    }
}
