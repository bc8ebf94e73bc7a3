/// Read-only element of the source document.
///
/// Only elements are kept; text and comments are dropped by the reader.
/// Children are looked up by local name within the parent's namespace, the
/// way the BioNetGen XML schema is addressed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    tag: String,
    namespace: Option<String>,
    attributes: Vec<(String, String)>,
    children: Vec<Node>,
}

impl Node {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            namespace: None,
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    /// Sets an attribute, replacing an existing value of the same name.
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attr(name.into(), value.into());
        self
    }

    pub fn with_child(mut self, child: Node) -> Self {
        self.children.push(child);
        self
    }

    pub fn with_children(mut self, children: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(children);
        self
    }

    fn set_attr(&mut self, name: String, value: String) {
        match self.attributes.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = value,
            None => self.attributes.push((name, value)),
        }
    }

    #[inline]
    pub fn tag(&self) -> &str {
        &self.tag
    }

    #[inline]
    pub fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn attributes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attributes.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    #[inline]
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// First direct child named `tag` in this node's namespace.
    pub fn child(&self, tag: &str) -> Option<&Node> {
        self.children
            .iter()
            .find(|c| c.tag == tag && c.namespace == self.namespace)
    }

    /// Short description used in diagnostics, e.g. `ReactionRule "RR1"`.
    pub fn label(&self) -> String {
        match self.attribute("id").or_else(|| self.attribute("name")) {
            Some(id) => format!("{} \"{}\"", self.tag, id),
            None => self.tag.clone(),
        }
    }

    pub(crate) fn from_xml(node: roxmltree::Node<'_, '_>) -> Self {
        let mut out = Node {
            tag: node.tag_name().name().to_string(),
            namespace: node.tag_name().namespace().map(str::to_owned),
            attributes: Vec::new(),
            children: Vec::new(),
        };
        for attr in node.attributes() {
            out.set_attr(attr.name().to_string(), attr.value().to_string());
        }
        out.children = node
            .children()
            .filter(|c| c.is_element())
            .map(Node::from_xml)
            .collect();
        out
    }
}
