//! Row/page materialization
//!
//! Decides whether a pressed item is shown as a leaf or expanded into a
//! page listing its nested examples.

use crate::catalog::Example;

/// A page built for a group item
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExamplePage {
    pub title: String,
    pub description: String,
    pub examples: Vec<Example>,
}

/// Builds pages for group items
///
/// `parent` names the page the group was opened from. The explorer opens
/// groups from its top-level list, so it always passes `None`.
pub trait PageFactory {
    fn create_page(&self, parent: Option<&str>, example: &Example) -> ExamplePage;
}

/// Default factory: a page is the group's nested examples, in order
#[derive(Debug, Clone, Copy, Default)]
pub struct ExamplePageFactory;

impl PageFactory for ExamplePageFactory {
    fn create_page(&self, _parent: Option<&str>, example: &Example) -> ExamplePage {
        ExamplePage {
            title: example.title.clone(),
            description: example.description.clone(),
            examples: example.examples.clone().unwrap_or_default(),
        }
    }
}

/// What the detail view shows for an item
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Renderable {
    Leaf(Example),
    Page(ExamplePage),
}

impl Renderable {
    pub fn title(&self) -> &str {
        match self {
            Renderable::Leaf(example) => &example.title,
            Renderable::Page(page) => &page.title,
        }
    }
}

/// Groups with nested examples go through the factory, everything else is returned as is
pub fn make_renderable<F: PageFactory + ?Sized>(example: Example, factory: &F) -> Renderable {
    if example.has_nested_examples() {
        Renderable::Page(factory.create_page(None, &example))
    } else {
        Renderable::Leaf(example)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    struct CountingFactory {
        calls: Cell<usize>,
    }

    impl PageFactory for CountingFactory {
        fn create_page(&self, parent: Option<&str>, example: &Example) -> ExamplePage {
            assert!(parent.is_none());
            self.calls.set(self.calls.get() + 1);
            ExamplePageFactory.create_page(parent, example)
        }
    }

    #[test]
    fn test_group_becomes_page() {
        let group = Example::group("Group", "nested", vec![Example::new("X", "")]);
        let renderable = make_renderable(group, &ExamplePageFactory);

        match renderable {
            Renderable::Page(page) => {
                assert_eq!(page.title, "Group");
                assert_eq!(page.examples, vec![Example::new("X", "")]);
            }
            other => panic!("expected a page, got {:?}", other),
        }
    }

    #[test]
    fn test_leaf_is_returned_unchanged() {
        let leaf = Example::new("Leaf", "plain");
        let renderable = make_renderable(leaf.clone(), &ExamplePageFactory);
        assert_eq!(renderable, Renderable::Leaf(leaf));
        assert_eq!(renderable.title(), "Leaf");
    }

    #[test]
    fn test_factory_only_called_for_groups() {
        let factory = CountingFactory {
            calls: Cell::new(0),
        };

        make_renderable(Example::new("Leaf", ""), &factory);
        make_renderable(Example::group("Empty", "", vec![]), &factory);
        assert_eq!(factory.calls.get(), 0);

        let renderable =
            make_renderable(Example::group("Group", "", vec![Example::new("X", "")]), &factory);
        assert_eq!(factory.calls.get(), 1);
        assert_eq!(renderable.title(), "Group");
    }
}
