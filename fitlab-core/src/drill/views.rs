//! The four drill-down instantiations over a catalog.

use crate::catalog::Catalog;
use crate::domain::{
    AssessmentResult, Athlete, PerformanceTest, Screen, SkillComponent, SubModule, TestBattery,
};

use super::DrillDown;

fn screens(module: &SubModule) -> &[Screen] {
    &module.screens
}

fn battery_tests(battery: &TestBattery) -> &[PerformanceTest] {
    &battery.tests
}

fn skill_tests(component: &SkillComponent) -> &[PerformanceTest] {
    &component.tests
}

fn assessments(athlete: &Athlete) -> &[AssessmentResult] {
    &athlete.assessments
}

/// Sub-modules → screens → screen detail.
pub fn assessment(catalog: &Catalog) -> DrillDown<'_, SubModule, Screen> {
    DrillDown::new(&catalog.sub_modules, screens)
}

/// Test batteries → tests → test detail.
pub fn integrated_testing(catalog: &Catalog) -> DrillDown<'_, TestBattery, PerformanceTest> {
    DrillDown::new(&catalog.batteries, battery_tests)
}

/// Skill components → tests → test detail.
pub fn skill_performance(catalog: &Catalog) -> DrillDown<'_, SkillComponent, PerformanceTest> {
    DrillDown::new(&catalog.skill_components, skill_tests)
}

/// Athletes → recorded assessments → assessment detail.
pub fn athletes(catalog: &Catalog) -> DrillDown<'_, Athlete, AssessmentResult> {
    DrillDown::new(&catalog.athletes, assessments)
}
