use percolation::{
    union_find::{Element, UnionFind},
    InvalidArgument,
};

/// Dummy implementation, union takes linear time.
#[derive(Debug, Clone)]
pub struct QuickFind {
    id: Vec<usize>,
}

impl UnionFind for QuickFind {
    fn new(len: usize) -> Self {
        Self {
            id: (0..len).collect(),
        }
    }

    fn len(&self) -> usize {
        self.id.len()
    }

    fn count(&self) -> usize {
        let mut ids = self.id.clone();
        ids.sort();
        ids.dedup();
        ids.len()
    }

    fn find(&mut self, x: Element) -> Result<Element, InvalidArgument> {
        self.validate(x)?;
        Ok(self.id[x])
    }

    fn union(&mut self, x: Element, y: Element) -> Result<bool, InvalidArgument> {
        let (ix, iy) = (self.find(x)?, self.find(y)?);
        if ix == iy {
            return Ok(false);
        }
        for id in &mut self.id {
            if *id == iy {
                *id = ix;
            }
        }
        Ok(true)
    }
}
