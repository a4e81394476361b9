//! Fill the job-analysis questionnaire, persist it, and print the HTML
//! report for each section.
//!
//! Run with: cargo run --example fill_and_report

use example_forms::{MobilityDemands, Questionnaire, Section, WorkEnvironment};
use gridform_doc_html::ReportOptions;
use gridform_store::MemoryStore;

fn main() -> anyhow::Result<()> {
    let mut questionnaire = Questionnaire::job_analysis()?;

    // A welder's workplace, roughly.
    {
        let mobility = &mut questionnaire.sections_mut()[0];
        for row in 0..mobility.grid().row_count() {
            mobility.grid_mut().select(row, MobilityDemands::OCCASIONALLY);
        }
        mobility.grid_mut().select(1, MobilityDemands::CONSTANTLY); // standing
        mobility.grid_mut().select(0, MobilityDemands::NEVER); // sitting
    }
    {
        let environment = &mut questionnaire.sections_mut()[1];
        environment.grid_mut().select(0, WorkEnvironment::APPLIES);
        environment.grid_mut().select(0, WorkEnvironment::PPE_REQUIRED);
        environment
            .grid_mut()
            .set_input(0, WorkEnvironment::REMARKS, "ear muffs provided");
        for row in 1..environment.grid().row_count() {
            environment.grid_mut().select(row, WorkEnvironment::DOES_NOT_APPLY);
        }
    }

    let mut store = MemoryStore::new();
    questionnaire.save_all(&mut store)?;
    println!(
        "saved {} sections, submittable: {}",
        questionnaire.sections().len(),
        questionnaire.is_submittable()
    );

    for section in questionnaire.sections_mut() {
        let report = section.validate();
        let options = ReportOptions::new().with_title(section.title().to_string());
        let html = gridform_doc_html::to_html_with_report(section.grid(), &report, &options);
        println!("{html}");
    }

    Ok(())
}
