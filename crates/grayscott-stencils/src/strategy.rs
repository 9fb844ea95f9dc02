//! Strategy selection.

use std::fmt;
use std::str::FromStr;

use grayscott_stencil::LaplacianStencil;

use crate::convolution::MatrixConvolutionStencil;
use crate::fused::FusedStencil;
use crate::two_pass::TwoPassStencil;

/// Which Laplacian execution strategy a simulation uses.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum StencilStrategy {
    /// [`FusedStencil`].
    #[default]
    Fused,
    /// [`TwoPassStencil`].
    TwoPass,
    /// [`MatrixConvolutionStencil`] with the Laplacian kernel.
    MatrixConvolution,
}

impl StencilStrategy {
    /// Every strategy, in declaration order.
    pub const ALL: [StencilStrategy; 3] = [Self::Fused, Self::TwoPass, Self::MatrixConvolution];

    /// Instantiate the strategy.
    pub fn stencil(self) -> Box<dyn LaplacianStencil> {
        match self {
            Self::Fused => Box::new(FusedStencil),
            Self::TwoPass => Box::new(TwoPassStencil),
            Self::MatrixConvolution => Box::new(MatrixConvolutionStencil::new()),
        }
    }

    /// Stable name, identical to the stencil's `name()`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Fused => "fused",
            Self::TwoPass => "two-pass",
            Self::MatrixConvolution => "matrix-convolution",
        }
    }
}

impl fmt::Display for StencilStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StencilStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|strategy| strategy.as_str() == s)
            .ok_or_else(|| format!("unknown stencil strategy '{s}'"))
    }
}
