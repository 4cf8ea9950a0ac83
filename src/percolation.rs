//! Incremental top-to-bottom connectivity on an n-by-n grid of sites.

use crate::{
    error::{InvalidArgument, Result},
    union_find::{Element, UnionFind, WeightedQuickUnion},
};

/// An n-by-n grid where sites are opened one at a time, addressed by 1-indexed (row, col).
///
/// Two forests are kept over the sites plus a virtual top and a virtual bottom element.
/// `percolation` links the bottom row to the virtual bottom, `fullness` never does, so a site
/// touching the bottom row is not reported full just because the grid percolates through
/// some other path.
#[derive(Debug, Clone)]
pub struct Percolation<U = WeightedQuickUnion>
where
    U: UnionFind,
{
    n: usize,
    open: Vec<bool>,
    open_sites: usize,
    percolation: U,
    fullness: U,
}

impl<U: UnionFind> Percolation<U> {
    const TOP: Element = 0;

    /// Creates an n-by-n grid with all sites blocked.
    pub fn new(n: usize) -> Result<Self> {
        if n == 0 {
            return Err(InvalidArgument::EmptyGrid);
        }
        let len = n
            .checked_mul(n)
            .and_then(|sites| sites.checked_add(2))
            .ok_or(InvalidArgument::GridTooLarge { n })?;
        let mut open = Vec::new();
        open.try_reserve_exact(len).map_err(|_| InvalidArgument::GridTooLarge { n })?;
        open.resize(len, false);
        Ok(Self {
            n,
            open,
            open_sites: 0,
            percolation: U::new(len),
            fullness: U::new(len),
        })
    }

    fn bottom(&self) -> Element {
        self.n * self.n + 1
    }

    fn validate(&self, row: usize, col: usize) -> Result<Element> {
        if (1..=self.n).contains(&row) && (1..=self.n).contains(&col) {
            Ok(self.index(row, col))
        } else {
            Err(InvalidArgument::SiteOutOfRange { row, col, n: self.n })
        }
    }

    fn index(&self, row: usize, col: usize) -> Element {
        (row - 1) * self.n + col
    }

    fn union_both(&mut self, a: Element, b: Element) -> Result<()> {
        self.percolation.union(a, b)?;
        self.fullness.union(a, b)?;
        Ok(())
    }

    /// Links an opened site with one of its 4 neighbours, or with a virtual element when the
    /// neighbour is just above or below the grid. Neighbours left or right of the grid are ignored.
    fn connect(&mut self, site: Element, row: usize, col: usize) -> Result<()> {
        if (1..=self.n).contains(&row) && (1..=self.n).contains(&col) {
            let other = self.index(row, col);
            if self.open[other] {
                self.union_both(site, other)?;
            }
        } else if row == 0 {
            self.union_both(site, Self::TOP)?;
        } else if row == self.n + 1 {
            // Only the percolation forest ever sees the virtual bottom.
            let bottom = self.bottom();
            self.percolation.union(site, bottom)?;
        }
        Ok(())
    }

    /// Opens the site if it is not open already. Returns whether it was newly opened.
    pub fn open(&mut self, row: usize, col: usize) -> Result<bool> {
        let site = self.validate(row, col)?;
        if self.open[site] {
            return Ok(false);
        }
        self.open[site] = true;
        self.open_sites += 1;
        log::trace!("open ({row}, {col})");
        self.connect(site, row - 1, col)?;
        self.connect(site, row + 1, col)?;
        self.connect(site, row, col - 1)?;
        self.connect(site, row, col + 1)?;
        Ok(true)
    }

    pub fn is_open(&self, row: usize, col: usize) -> Result<bool> {
        Ok(self.open[self.validate(row, col)?])
    }

    /// Is the site open and linked to the top row through open sites?
    pub fn is_full(&mut self, row: usize, col: usize) -> Result<bool> {
        let site = self.validate(row, col)?;
        Ok(self.open[site] && self.fullness.connected(Self::TOP, site)?)
    }

    pub fn number_of_open_sites(&self) -> usize {
        self.open_sites
    }

    /// Is there a chain of open sites from the top row to the bottom row?
    pub fn percolates(&mut self) -> bool {
        let bottom = self.bottom();
        // Both virtual elements are always in range, so this is never an error.
        matches!(self.percolation.connected(Self::TOP, bottom), Ok(true))
    }

    /// Dimension of the grid.
    pub fn size(&self) -> usize {
        self.n
    }
}
