//! Catalog shipped with the binary, used when no catalog file is configured.

use crate::types::{CatalogItem, OptionCatalog};

impl OptionCatalog {
    /// The built-in catalog.
    pub fn builtin() -> Self {
        Self {
            business_models: vec![
                CatalogItem::new("ecommerce", "E-commerce")
                    .with_description("Online store selling physical or digital goods"),
                CatalogItem::new("saas", "SaaS")
                    .with_description("Subscription software delivered online"),
                CatalogItem::new("marketplace", "Marketplace")
                    .with_description("Platform connecting buyers and sellers"),
                CatalogItem::new("services", "Services")
                    .with_description("Agency, consulting or professional services"),
                CatalogItem::new("education", "Education")
                    .with_description("Courses, training and learning platforms"),
                CatalogItem::new("other", "Other"),
            ],
            team_sizes: vec![
                CatalogItem::new("solo", "Just me"),
                CatalogItem::new("small", "2-10 people"),
                CatalogItem::new("medium", "11-50 people"),
                CatalogItem::new("large", "51-200 people"),
                CatalogItem::new("enterprise", "200+ people"),
            ],
            request_volumes: vec![
                CatalogItem::new("low", "Under 100 requests / month"),
                CatalogItem::new("moderate", "100-1,000 requests / month"),
                CatalogItem::new("high", "1,000-10,000 requests / month"),
                CatalogItem::new("very_high", "Over 10,000 requests / month"),
            ],
            objectives: vec![
                CatalogItem::new("reduce_response_time", "Reduce response time")
                    .with_description("Answer customers in seconds instead of hours")
                    .with_icon("clock"),
                CatalogItem::new("always_available", "Available 24/7")
                    .with_description("Cover nights, weekends and holidays")
                    .with_icon("moon"),
                CatalogItem::new("reduce_ticket_volume", "Reduce ticket volume")
                    .with_description("Resolve repetitive questions automatically")
                    .with_icon("inbox"),
                CatalogItem::new("improve_satisfaction", "Improve satisfaction")
                    .with_description("Raise CSAT with consistent, accurate answers")
                    .with_icon("smile"),
                CatalogItem::new("qualify_leads", "Qualify leads")
                    .with_description("Capture and route sales opportunities")
                    .with_icon("target"),
                CatalogItem::new("onboard_users", "Onboard new users")
                    .with_description("Guide newcomers through their first steps")
                    .with_icon("rocket"),
                CatalogItem::new("grow_community", "Grow the community")
                    .with_description("Welcome members and moderate discussions")
                    .with_icon("users"),
            ],
            features: vec![
                CatalogItem::new("faq_answers", "FAQ answers")
                    .with_description("Answer from the FAQ you author in this wizard")
                    .selected_by_default(),
                CatalogItem::new("ticket_creation", "Ticket creation")
                    .with_description("Open a ticket when the agent cannot resolve a request")
                    .selected_by_default(),
                CatalogItem::new("human_handoff", "Human handoff")
                    .with_description("Escalate the conversation to a team member")
                    .selected_by_default(),
                CatalogItem::new("order_tracking", "Order tracking")
                    .with_description("Look up order and shipping status"),
                CatalogItem::new("sentiment_analysis", "Sentiment analysis")
                    .with_description("Flag frustrated customers for priority handling"),
                CatalogItem::new("appointment_booking", "Appointment booking")
                    .with_description("Schedule calls and meetings"),
                CatalogItem::new("satisfaction_survey", "Satisfaction survey")
                    .with_description("Ask for a rating at the end of a conversation"),
            ],
            tones: vec![
                CatalogItem::new("professional", "Professional")
                    .with_description("Precise and courteous"),
                CatalogItem::new("friendly", "Friendly").with_description("Warm and approachable"),
                CatalogItem::new("casual", "Casual").with_description("Relaxed, conversational"),
                CatalogItem::new("empathetic", "Empathetic")
                    .with_description("Patient and reassuring"),
                CatalogItem::new("enthusiastic", "Enthusiastic")
                    .with_description("Energetic and upbeat"),
            ],
            languages: vec![
                CatalogItem::new("en", "English").selected_by_default(),
                CatalogItem::new("fr", "French"),
                CatalogItem::new("es", "Spanish"),
                CatalogItem::new("de", "German"),
                CatalogItem::new("it", "Italian"),
                CatalogItem::new("pt", "Portuguese"),
                CatalogItem::new("nl", "Dutch"),
                CatalogItem::new("ja", "Japanese"),
            ],
            communication_channels: vec![
                CatalogItem::new("email", "Email"),
                CatalogItem::new("live_chat", "Website live chat"),
                CatalogItem::new("whatsapp", "WhatsApp"),
                CatalogItem::new("messenger", "Facebook Messenger"),
                CatalogItem::new("instagram", "Instagram"),
                CatalogItem::new("slack", "Slack"),
                CatalogItem::new("discord", "Discord"),
            ],
            ticketing_systems: vec![
                CatalogItem::new("zendesk", "Zendesk"),
                CatalogItem::new("freshdesk", "Freshdesk"),
                CatalogItem::new("intercom", "Intercom"),
                CatalogItem::new("hubspot", "HubSpot Service Hub"),
                CatalogItem::new("jira_service_management", "Jira Service Management"),
            ],
            ecommerce_tools: vec![
                CatalogItem::new("shopify", "Shopify"),
                CatalogItem::new("woocommerce", "WooCommerce"),
                CatalogItem::new("prestashop", "PrestaShop"),
                CatalogItem::new("magento", "Magento"),
                CatalogItem::new("stripe", "Stripe"),
            ],
        }
    }
}
