use std::sync::Arc;

use alice_engine::coords::{Rect, Vec2};
use alice_engine::model::{Model, ModelMesh, TessellateError};
use alice_engine::paint::Color;

// ── Element ───────────────────────────────────────────────────────────────

/// A node of the UI tree.
///
/// Locations are relative to the parent's origin (bottom-left, +Y up).
/// Panels and groups move the origin for their children; grids and models are leaves.
#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    Panel(Panel),
    Group(Group),
    Grid(Grid),
    Model(ModelElement),
}

impl Element {
    /// Children of a panel or group; empty for leaves.
    pub fn children(&self) -> &[Element] {
        match self {
            Element::Panel(p) => &p.children,
            Element::Group(g) => &g.children,
            Element::Grid(_) | Element::Model(_) => &[],
        }
    }

    /// Mutable access to the children of a panel or group.
    pub fn children_mut(&mut self) -> Option<&mut Vec<Element>> {
        match self {
            Element::Panel(p) => Some(&mut p.children),
            Element::Group(g) => Some(&mut g.children),
            Element::Grid(_) | Element::Model(_) => None,
        }
    }
}

// ── Panel ─────────────────────────────────────────────────────────────────

/// Filled rectangle with an optional border band drawn inside its edge.
#[derive(Debug, Clone, PartialEq)]
pub struct Panel {
    pub location: Vec2,
    pub size: Vec2,
    /// Straight-alpha fill.
    pub fill_colour: Color,
    /// Border is opaque; alpha is ignored.
    pub border_colour: Color,
    /// Whole pixels; 0 disables the border.
    pub border_width: u32,
    pub children: Vec<Element>,
}

impl Panel {
    pub fn new(location: impl Into<Vec2>, size: impl Into<Vec2>) -> Self {
        Self {
            location: location.into(),
            size: size.into(),
            fill_colour: Color::transparent(),
            border_colour: Color::rgb(0.0, 0.0, 0.0),
            border_width: 0,
            children: Vec::new(),
        }
    }

    pub fn fill(mut self, colour: impl Into<Color>) -> Self {
        self.fill_colour = colour.into();
        self
    }

    pub fn border(mut self, width: u32, colour: impl Into<Color>) -> Self {
        self.border_width = width;
        self.border_colour = colour.into();
        self
    }

    pub fn child(mut self, child: impl Into<Element>) -> Self {
        self.children.push(child.into());
        self
    }
}

// ── Group ─────────────────────────────────────────────────────────────────

/// Invisible container that only offsets its children.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Group {
    pub location: Vec2,
    pub children: Vec<Element>,
}

impl Group {
    pub fn new(location: impl Into<Vec2>) -> Self {
        Self { location: location.into(), children: Vec::new() }
    }

    pub fn child(mut self, child: impl Into<Element>) -> Self {
        self.children.push(child.into());
        self
    }
}

// ── Grid ──────────────────────────────────────────────────────────────────

/// One-pixel grid lines over `bounds`, every `cell_size` pixels, phase-shifted by `offset`.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    pub bounds: Rect,
    pub cell_size: Vec2,
    pub offset: Vec2,
    /// Line colour; alpha is ignored.
    pub colour: Color,
}

impl Grid {
    pub fn new(bounds: Rect, cell_size: impl Into<Vec2>, colour: impl Into<Color>) -> Self {
        Self {
            bounds,
            cell_size: cell_size.into(),
            offset: Vec2::zero(),
            colour: colour.into(),
        }
    }

    pub fn offset(mut self, offset: impl Into<Vec2>) -> Self {
        self.offset = offset.into();
        self
    }
}

// ── ModelElement ──────────────────────────────────────────────────────────

/// A vector model drawn at `location`, scaled uniformly by `scale`.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelElement {
    pub location: Vec2,
    pub scale: f32,
    pub mesh: Arc<ModelMesh>,
}

impl ModelElement {
    /// Tessellates `model` once; the mesh is shared by clones of this element.
    pub fn new(location: impl Into<Vec2>, scale: f32, model: &Model) -> Result<Self, TessellateError> {
        Ok(Self::from_mesh(location, scale, ModelMesh::shared(model)?))
    }

    pub fn from_mesh(location: impl Into<Vec2>, scale: f32, mesh: Arc<ModelMesh>) -> Self {
        Self { location: location.into(), scale, mesh }
    }
}

// ── conversions ───────────────────────────────────────────────────────────

impl From<Panel> for Element {
    fn from(p: Panel) -> Self {
        Element::Panel(p)
    }
}

impl From<Group> for Element {
    fn from(g: Group) -> Self {
        Element::Group(g)
    }
}

impl From<Grid> for Element {
    fn from(g: Grid) -> Self {
        Element::Grid(g)
    }
}

impl From<ModelElement> for Element {
    fn from(m: ModelElement) -> Self {
        Element::Model(m)
    }
}
