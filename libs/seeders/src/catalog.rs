use content_models::{DocumentCategory, PostType};

#[derive(Debug, Clone, Copy)]
pub struct PostTemplate {
    pub post_type: PostType,
    pub title: &'static str,
    pub content: &'static str,
    pub tags: &'static [&'static str],
    pub is_pinned: bool,
    pub external_link: Option<&'static str>,
}

/// A comment body and the catalog position of the post it belongs to.
#[derive(Debug, Clone, Copy)]
pub struct CommentTemplate {
    pub content: &'static str,
    pub post_index: usize,
}

#[derive(Debug, Clone, Copy)]
pub struct DocumentTemplate {
    pub title: &'static str,
    pub category: DocumentCategory,
    pub description: &'static str,
    pub content: &'static str,
    pub tags: &'static [&'static str],
}

/// The fixed set of records one run writes.
#[derive(Debug, Clone, Copy)]
pub struct Catalog {
    pub posts: &'static [PostTemplate],
    pub comments: &'static [CommentTemplate],
    pub documents: &'static [DocumentTemplate],
}

impl Catalog {
    pub const fn demo() -> Self {
        Self {
            posts: DEMO_POSTS,
            comments: DEMO_COMMENTS,
            documents: DEMO_DOCUMENTS,
        }
    }
}

impl Default for Catalog {
    fn default() -> Self { Self::demo() }
}

pub static DEMO_POSTS: &[PostTemplate] = &[
    PostTemplate {
        post_type: PostType::News,
        title: "🚀 New EPA 2024 Standards for Heavy-Duty Diesel Engines",
        content: "The EPA has announced new emission standards that will take effect in 2024. Key changes include:

• **NOx emissions** reduced by 90% from current standards
• **Particulate matter** limits tightened significantly
• **Extended useful life** requirements to 450,000 miles
• **New testing procedures** for real-world conditions

These changes will require significant updates to aftertreatment systems, including SCR catalysts, DPF filters, and DEF dosing strategies.

**Impact on remanufacturing:** We'll need to update our testing protocols and ensure all reman units meet these new standards.",
        tags: &["EPA", "Regulations", "Emissions", "2024"],
        is_pinned: true,
        external_link: Some(
            "https://www.epa.gov/regulations-emissions-vehicles-and-engines",
        ),
    },
    PostTemplate {
        post_type: PostType::Bulletin,
        title: "📦 New Parts Shipment Arriving Friday",
        content: "Just got confirmation from our supplier - large shipment arriving this Friday:

✅ **150 turbochargers** (various models)
✅ **80 EGR coolers** (Cummins ISX)
✅ **200 injectors** (Detroit DD15)
✅ **50 high-pressure fuel pumps** (Duramax)

Please plan warehouse space accordingly. Stock will be unloaded starting 8 AM.

If you need anything from this shipment prioritized, let me know ASAP!",
        tags: &["Inventory", "Shipment", "Warehouse"],
        is_pinned: false,
        external_link: None,
    },
    PostTemplate {
        post_type: PostType::DieselTech,
        title: "💡 Understanding Common Rail Injection Pressure Trends",
        content: "Interesting trend we're seeing in modern diesel engines - injection pressures keep climbing:

**2000-2005:** 1,600 bar (23,000 PSI)
**2010-2015:** 2,000 bar (29,000 PSI)
**2020+:** 2,500+ bar (36,000+ PSI)

**Why?** Higher pressure = better fuel atomization = cleaner combustion = lower emissions.

**Challenges:**
- More stress on injector components
- Tighter tolerances required
- More sensitive to fuel quality
- Higher costs for replacement parts

**For remanufacturing:** We need to pay extra attention to wear patterns and ensure precise calibration. Even small deviations can cause performance issues.

What pressures are you seeing in the shop?",
        tags: &["Common Rail", "Fuel Systems", "Tech Deep-Dive"],
        is_pinned: false,
        external_link: None,
    },
    PostTemplate {
        post_type: PostType::Announcement,
        title: "⚠️ DEF Quality Issues - National Alert",
        content: "**URGENT:** Multiple reports of contaminated DEF (Diesel Exhaust Fluid) causing SCR system failures across the country.

**Symptoms:**
- SCR efficiency codes (P20EE, P20BA)
- Crystallization in dosing modules
- Clogged DEF lines and injectors

**Affected brands:** Several off-brand suppliers (names withheld pending investigation)

**Recommendation:**
- Use only **ISO 22241-compliant DEF**
- Check DEF concentration with refractometer
- Inspect customer's DEF supply if you see SCR issues
- Document DEF brand when diagnosing failures

This could save you hours of diagnostic time. Stay alert!",
        tags: &["DEF", "SCR", "Quality Alert", "Diagnostics"],
        is_pinned: true,
        external_link: None,
    },
    PostTemplate {
        post_type: PostType::DieselTech,
        title: "🔧 Turbo Failure Analysis: What We Can Learn",
        content: "Analyzed 50 failed turbos last month. Here's what we found:

**Top failure modes:**
1. **Oil contamination (32%)** - Dirty oil destroying bearings
2. **Compressor surge (24%)** - Improper sizing/installation
3. **Exhaust restrictions (18%)** - DPF issues causing back pressure
4. **Shaft imbalance (15%)** - FOD or manufacturing defect
5. **Other (11%)** - Various causes

**Key takeaway:** Most failures are preventable!

✅ Regular oil changes
✅ Proper air filtration
✅ Correct turbo sizing
✅ Monitor DPF condition

Worth sharing with customers - might save them money!",
        tags: &["Turbochargers", "Failure Analysis", "Preventive Maintenance"],
        is_pinned: false,
        external_link: None,
    },
    PostTemplate {
        post_type: PostType::Bulletin,
        title: "🎉 Shop Floor Safety Record - 100 Days!",
        content: "Amazing milestone team!

**100 days without a workplace injury!** 🎊

This doesn't happen by accident. Thank you all for:
- Following safety protocols
- Wearing proper PPE
- Looking out for each other
- Reporting hazards immediately

Let's keep this streak going! Safety first, always.

Pizza party this Friday to celebrate! 🍕",
        tags: &["Safety", "Team", "Milestone"],
        is_pinned: false,
        external_link: None,
    },
];

pub static DEMO_COMMENTS: &[CommentTemplate] = &[
    CommentTemplate {
        content: "Great info! We've been seeing these pressure issues too.",
        post_index: 0,
    },
    CommentTemplate {
        content: "Thanks for the heads up on the DEF quality problems!",
        post_index: 1,
    },
    CommentTemplate {
        content: "Can we get specs on those new turbos?",
        post_index: 2,
    },
    CommentTemplate {
        content: "This is exactly what I needed to know!",
        post_index: 0,
    },
    CommentTemplate {
        content: "Pizza party! Count me in! 🍕",
        post_index: 1,
    },
];

pub static DEMO_DOCUMENTS: &[DocumentTemplate] = &[
    DocumentTemplate {
        title: "Turbocharger Rebuild Procedure - Training Video",
        category: DocumentCategory::TrainingVideo,
        description: "Step-by-step training video for rebuilding common rail \
                      turbochargers",
        content: "## Turbocharger Rebuild Procedure

1. Record the turbo part number and inspect for oil or coolant contamination.
2. Mark housing orientation, then separate compressor and turbine housings.
3. Remove the center housing rotating assembly (CHRA) and check shaft play.
4. Replace bearings, seals and thrust collar with the rebuild kit.
5. Balance the rotating assembly before final assembly.
6. Torque housing clamps to spec and pre-lube before start-up.

Reference file: /docs/turbo-rebuild-guide.pdf",
        tags: &["Turbo", "Rebuild", "Procedure", "Technical"],
    },
    DocumentTemplate {
        title: "Common DPF Fault Codes - Quick Reference",
        category: DocumentCategory::Faq,
        description: "Quick reference guide for DPF-related fault codes and \
                      solutions",
        content: "## DPF Fault Codes

| Code  | Meaning                                   | First check                         |
|-------|-------------------------------------------|-------------------------------------|
| P2002 | DPF efficiency below threshold            | Cracked substrate, sensor lines     |
| P2463 | DPF soot accumulation                     | Force a regen, check driving cycle  |
| P244A | DPF differential pressure too low         | Sensor hoses, leaks before the DPF  |
| P244B | DPF differential pressure too high        | Ash loading, plugged filter         |
| P2458 | DPF regeneration duration exceeded        | Doser, EGT sensors, fuel quality    |

Reference file: /docs/dpf-fault-codes.pdf",
        tags: &["DPF", "Diagnostics", "Fault Codes"],
    },
    DocumentTemplate {
        title: "Safety Data Sheet - Diesel Fuel Handling",
        category: DocumentCategory::SafetyGuideline,
        description: "SDS for #2 Diesel Fuel handling and emergency procedures",
        content: "## Diesel Fuel No. 2 - Handling Summary

**Hazards:** Combustible liquid. Harmful if swallowed; may enter lungs.
**PPE:** Nitrile gloves, safety glasses, long sleeves.
**Storage:** Approved containers, away from ignition sources, ventilated area.
**Spills:** Stop the source, contain with absorbent, keep out of drains.
**First aid:** Skin - wash with soap and water. Eyes - flush 15 minutes.
Ingestion - do not induce vomiting, get medical help.

Reference file: /docs/diesel-fuel-sds.pdf",
        tags: &["Safety", "SDS", "Diesel Fuel"],
    },
];

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_demo_catalog_shape() {
        let catalog = Catalog::demo();

        assert_eq!(catalog.posts.len(), 6);
        assert_eq!(catalog.comments.len(), 5);
        assert_eq!(catalog.documents.len(), 3);
    }

    #[test]
    fn test_demo_comments_point_at_demo_posts() {
        let catalog = Catalog::demo();

        for comment in catalog.comments {
            assert!(comment.post_index < catalog.posts.len());
        }
    }

    #[test]
    fn test_demo_posts_cover_every_post_type() {
        let types: HashSet<PostType> =
            DEMO_POSTS.iter().map(|post| post.post_type).collect();

        assert_eq!(types.len(), 4);
        assert_eq!(DEMO_POSTS.iter().filter(|post| post.is_pinned).count(), 2);
    }

    #[test]
    fn test_demo_documents_have_distinct_categories() {
        let categories: HashSet<DocumentCategory> =
            DEMO_DOCUMENTS.iter().map(|doc| doc.category).collect();

        assert_eq!(categories.len(), DEMO_DOCUMENTS.len());
        assert!(DEMO_DOCUMENTS.iter().all(|doc| !doc.tags.is_empty()));
    }
}
