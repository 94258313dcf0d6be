use crate::report::{BatchReport, GroupSummary, RatingReport, ReportStatus, format_f32_6};

pub fn render_report_text(report: &RatingReport) -> String {
    let mut out = String::new();

    match &report.name {
        Some(name) => out.push_str(&format!("Camouflage rating: {name}\n")),
        None => out.push_str("Camouflage rating\n"),
    }
    out.push_str("=================\n");
    out.push_str(&format!("Mode: {}\n", report.mode.as_str()));
    out.push_str(&format!(
        "Sensitivity: {}\n",
        format_f32_6(report.sensitivity)
    ));
    if let Some(crop) = report.crop {
        out.push_str(&format!(
            "Crop: {}x{} at ({}, {})\n",
            crop.width, crop.height, crop.x, crop.y
        ));
    }

    match report.status {
        ReportStatus::Rated => {
            if let Some(bg) = &report.background {
                out.push_str(&format!("Background: {}\n", group_line(bg)));
            }
            if let Some(tg) = &report.target {
                out.push_str(&format!("Target: {}\n", group_line(tg)));
            }
            if let (Some(rating), Some(label)) = (report.rating, report.label) {
                out.push_str(&format!("Rating: {} ({})\n", format_f32_6(rating), label));
            }
            out.push_str(&format!(
                "Detected: {}\n",
                if report.detected { "yes" } else { "no" }
            ));
        }
        ReportStatus::Undetermined => {
            let group = report
                .empty_group
                .map(|g| g.to_string())
                .unwrap_or_else(|| "unknown".to_string());
            out.push_str(&format!("Rating: undetermined (no {group} pixels)\n"));
        }
        ReportStatus::OutOfView => {
            out.push_str("Rating: skipped (target outside the view)\n");
        }
        ReportStatus::Error => {
            out.push_str(&format!(
                "Rating: failed ({})\n",
                report.error.as_deref().unwrap_or("unknown error")
            ));
        }
    }

    out
}

pub fn render_batch_text(batch: &BatchReport) -> String {
    let mut out = String::new();
    for frame in &batch.frames {
        out.push_str(&render_report_text(frame));
        out.push('\n');
    }

    let s = &batch.summary;
    out.push_str("Summary\n");
    out.push_str("-------\n");
    out.push_str(&format!("Frames: {}\n", s.frames));
    out.push_str(&format!("Rated: {}\n", s.rated));
    out.push_str(&format!("Detected: {}\n", s.detected));
    out.push_str(&format!("Undetermined: {}\n", s.undetermined));
    out.push_str(&format!("Out of view: {}\n", s.out_of_view));
    out.push_str(&format!("Errors: {}\n", s.errors));
    if let Some(mean) = s.mean_rating {
        out.push_str(&format!("Mean rating: {}\n", format_f32_6(mean)));
    }
    out
}

fn group_line(group: &GroupSummary) -> String {
    let mut line = format!("{} px", group.count);
    if let Some(l) = group.mean_luminance {
        line.push_str(&format!(", mean luminance {}", format_f32_6(l)));
    }
    if let Some(hsv) = group.mean_hsv {
        line.push_str(&format!(
            ", mean hsv ({}, {}, {})",
            format_f32_6(hsv.h),
            format_f32_6(hsv.s),
            format_f32_6(hsv.v)
        ));
    }
    line
}
