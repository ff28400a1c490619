//! Adapter that plugs yard layout into the generic GA engine.

use super::operators::{block_templates, crossover, mutate, random_place};
use super::scoring::score_layout;
use super::types::{GenesisConstraints, GenesisPhysics, LayoutMeta, Rect, YardLayout, YardSpec};
use crate::ga::GaProblem;
use rand::Rng;

/// Yard layout as a [`GaProblem`].
///
/// Holds the immutable run inputs and the block templates, built once per run.
pub struct LayoutProblem<'a> {
    yard: YardSpec,
    constraints: &'a GenesisConstraints,
    physics: GenesisPhysics,
    templates: Vec<Rect>,
}

impl<'a> LayoutProblem<'a> {
    pub fn new(
        yard: YardSpec,
        constraints: &'a GenesisConstraints,
        physics: GenesisPhysics,
    ) -> Self {
        Self {
            yard,
            constraints,
            physics,
            templates: block_templates(constraints),
        }
    }

    /// Block templates in individual order.
    pub fn templates(&self) -> &[Rect] {
        &self.templates
    }

    fn unscored(&self, blocks: Vec<Rect>) -> YardLayout {
        YardLayout {
            yard: self.yard,
            blocks,
            meta: LayoutMeta::unscored(),
        }
    }
}

impl GaProblem for LayoutProblem<'_> {
    type Individual = YardLayout;

    fn create_individual<R: Rng>(&self, rng: &mut R) -> YardLayout {
        let blocks = self
            .templates
            .iter()
            .map(|t| random_place(rng, &self.yard, t))
            .collect();
        self.unscored(blocks)
    }

    fn evaluate(&self, individual: &mut YardLayout) {
        individual.meta = score_layout(
            &self.yard,
            &self.physics,
            self.constraints,
            &individual.blocks,
        );
    }

    fn crossover<R: Rng>(
        &self,
        parent1: &YardLayout,
        parent2: &YardLayout,
        rng: &mut R,
    ) -> YardLayout {
        self.unscored(crossover(rng, &parent1.blocks, &parent2.blocks))
    }

    /// Per-block mutation: `rate` is the chance each block is jittered.
    fn mutate<R: Rng>(&self, individual: &mut YardLayout, rate: f64, rng: &mut R) {
        mutate(rng, &self.yard, &mut individual.blocks, rate);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ga::Individual;
    use crate::random::create_rng;

    #[test]
    fn test_create_individual_follows_templates() {
        let constraints = GenesisConstraints::new(3, 2);
        let problem = LayoutProblem::new(
            YardSpec::new(100.0, 80.0),
            &constraints,
            GenesisPhysics::new(1.2, 9.5, 1.0),
        );
        let ind = problem.create_individual(&mut create_rng(1));
        assert_eq!(ind.blocks.len(), problem.templates().len());
        for (b, t) in ind.blocks.iter().zip(problem.templates()) {
            assert_eq!(b.id, t.id);
            assert_eq!((b.w, b.h), (t.w, t.h));
        }
        assert_eq!(ind.fitness(), f64::NEG_INFINITY);
    }

    #[test]
    fn test_evaluate_fills_meta() {
        let constraints = GenesisConstraints::new(3, 2);
        let problem = LayoutProblem::new(
            YardSpec::new(100.0, 80.0),
            &constraints,
            GenesisPhysics::new(1.2, 9.5, 1.0),
        );
        let mut ind = problem.create_individual(&mut create_rng(1));
        problem.evaluate(&mut ind);
        assert!(ind.fitness().is_finite());
        assert!(ind.meta.travel_meters_estimate < 200.0);
    }

    #[test]
    fn test_crossover_child_is_unscored() {
        let constraints = GenesisConstraints::new(2, 2);
        let problem = LayoutProblem::new(
            YardSpec::new(100.0, 80.0),
            &constraints,
            GenesisPhysics::new(1.2, 9.5, 1.0),
        );
        let mut rng = create_rng(2);
        let mut a = problem.create_individual(&mut rng);
        let b = problem.create_individual(&mut rng);
        problem.evaluate(&mut a);
        let child = problem.crossover(&a, &b, &mut rng);
        assert_eq!(child.meta, LayoutMeta::unscored());
        assert_eq!(child.blocks.len(), a.blocks.len());
    }
}
