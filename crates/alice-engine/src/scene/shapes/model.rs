use std::sync::Arc;

use crate::coords::Vec2;
use crate::model::ModelMesh;
use crate::scene::{DrawCmd, DrawList, ZIndex};

/// Model draw payload: a pre-tessellated mesh placed at `translate`, scaled by `scale`.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelCmd {
    pub translate: Vec2,
    pub scale: f32,
    pub mesh: Arc<ModelMesh>,
}

impl DrawList {
    /// Records a model draw command. The mesh is shared, not copied.
    #[inline]
    pub fn push_model(&mut self, z: ZIndex, translate: Vec2, scale: f32, mesh: Arc<ModelMesh>) {
        self.push(z, DrawCmd::Model(ModelCmd { translate, scale, mesh }));
    }
}
