use evoforge_genome::{
    Chromosome, ChromosomeId, Component, ComponentId, ComponentType, FitnessEvaluator, Gene,
    GeneId, GeneKind, LifecycleStage, UnitInterval,
};

/// Scores a chromosome as the expression of its first gene.
pub struct LeadExpression;

impl FitnessEvaluator for LeadExpression {
    fn evaluate(&self, chromosome: &Chromosome) -> UnitInterval {
        chromosome
            .genes()
            .first()
            .map(|g| g.expression)
            .unwrap_or(UnitInterval::ZERO)
    }
}

/// A single-chromosome component whose fitness is exactly `fitness`.
pub fn component(id: &str, fitness: f64, stage: LifecycleStage) -> Component {
    let genes = vec![
        Gene::new(GeneId::from(format!("{id}-g0")), GeneKind::Function, "fn a() {}")
            .with_expression(fitness),
        Gene::new(GeneId::from(format!("{id}-g1")), GeneKind::Class, "struct B;"),
    ];
    let chromosome = Chromosome::new(
        ChromosomeId::from(format!("{id}-c")),
        ComponentType::Core,
        genes,
        0,
        &LeadExpression,
    );
    Component::new(ComponentId::from(id), id, chromosome, 0).with_stage(stage)
}
