use yew::prelude::*;

use crate::config;
use crate::pages::{
    cta::CallToAction,
    faq::Faq,
    features::Features,
    footer::Footer,
    hero::Hero,
    navigation::Navigation,
    technology::TechnologyStack,
    testimonials::Testimonials,
};

#[function_component(Landing)]
pub fn landing() -> Html {
    let background = format!("background-image: url('{}');", config::BACKGROUND_GRID);

    html! {
        <main class="landing-page">
            <div class="landing-grid" style={background}></div>

            <div class="landing-layer">
                <Navigation />
                <Hero />
                <Features />
                <TechnologyStack />
                <Testimonials />
                <Faq />
                <CallToAction />
                <Footer />
            </div>

            <style>
                {r#"
                * {
                    box-sizing: border-box;
                }

                body {
                    margin: 0;
                    font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
                    background: #000;
                }

                .landing-page {
                    min-height: 100vh;
                    position: relative;
                    overflow: hidden;
                    color: #ffffff;
                    background: linear-gradient(to bottom, #000000, rgba(59, 7, 100, 0.95), #000000);
                }

                .landing-grid {
                    position: absolute;
                    inset: 0;
                    background-position: center;
                    -webkit-mask-image: linear-gradient(180deg, white, rgba(255, 255, 255, 0));
                    mask-image: linear-gradient(180deg, white, rgba(255, 255, 255, 0));
                    pointer-events: none;
                }

                .landing-layer {
                    position: relative;
                    z-index: 10;
                }

                .container {
                    max-width: 1200px;
                    margin: 0 auto;
                }

                .gradient-text {
                    background: linear-gradient(to right, #ffffff, #c084fc, #9333ea);
                    -webkit-background-clip: text;
                    background-clip: text;
                    -webkit-text-fill-color: transparent;
                }

                /* Header */
                .site-header {
                    position: fixed;
                    top: 0;
                    width: 100%;
                    z-index: 50;
                    backdrop-filter: blur(12px);
                    background: transparent;
                    border-bottom: 1px solid transparent;
                    transition: all 0.3s;
                    animation: slideDown 0.5s ease-out;
                }

                .site-header.scrolled {
                    background: rgba(0, 0, 0, 0.5);
                    border-bottom: 1px solid rgba(255, 255, 255, 0.05);
                }

                .nav-content {
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 1rem 1.5rem;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                }

                .brand, .nav-actions {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                }

                .nav-actions {
                    gap: 1rem;
                }

                .wordmark {
                    font-size: 1.5rem;
                    font-weight: 700;
                }

                .wordmark-small {
                    font-size: 1.25rem;
                }

                /* Building blocks */
                .section {
                    padding: 5rem 1.5rem;
                }

                .section-tinted {
                    background: rgba(88, 28, 135, 0.1);
                }

                .section-title {
                    font-size: 2.25rem;
                    font-weight: 700;
                    text-align: center;
                    margin: 0 0 3rem;
                }

                .section-title-small {
                    font-size: 1.875rem;
                }

                .badge {
                    display: inline-flex;
                    align-items: center;
                    padding: 0.25rem 0.75rem;
                    border-radius: 9999px;
                    font-size: 0.875rem;
                }

                .badge-accent {
                    background: rgba(168, 85, 247, 0.1);
                    color: #c084fc;
                    border: 1px solid rgba(168, 85, 247, 0.2);
                }

                .button-link {
                    text-decoration: none;
                }

                .button {
                    padding: 0.5rem 1rem;
                    border-radius: 0.5rem;
                    font-weight: 500;
                    font-size: 1rem;
                    display: flex;
                    align-items: center;
                    cursor: pointer;
                    border: none;
                    transition: all 0.3s;
                }

                .button-primary {
                    background: linear-gradient(to right, #9333ea, #c084fc);
                    color: #ffffff;
                }

                .button-primary:hover {
                    opacity: 0.9;
                }

                .button-ghost {
                    background: transparent;
                    color: #ffffff;
                }

                .button-ghost:hover {
                    background: rgba(255, 255, 255, 0.1);
                }

                .button-outline {
                    background: transparent;
                    color: #ffffff;
                    border: 1px solid #ffffff;
                }

                .button-outline:hover {
                    background: #ffffff;
                    color: #000000;
                }

                .button-large {
                    padding: 1.5rem 2rem;
                    font-size: 1.125rem;
                    border-radius: 9999px;
                }

                .button-row {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 1rem;
                    justify-content: center;
                    margin-bottom: 3rem;
                }

                .card {
                    border-radius: 0.5rem;
                    background: rgba(0, 0, 0, 0.5);
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    padding: 1.5rem;
                    backdrop-filter: blur(4px);
                    height: 100%;
                }

                .card-hover {
                    transition: all 0.3s;
                }

                .card-hover:hover {
                    border-color: rgba(168, 85, 247, 0.5);
                }

                .card-centered {
                    text-align: center;
                }

                .card-title {
                    font-size: 1.25rem;
                    font-weight: 600;
                    margin: 0 0 0.75rem;
                }

                .card-text {
                    color: #d1d5db;
                    margin: 0;
                }

                .card-text-small {
                    font-size: 0.875rem;
                }

                .icon {
                    width: 1.25rem;
                    height: 1.25rem;
                    flex-shrink: 0;
                }

                .icon-leading {
                    margin-right: 0.5rem;
                }

                .icon-trailing {
                    margin-left: 0.5rem;
                }

                .icon-accent {
                    color: #c084fc;
                    width: 1.5rem;
                    height: 1.5rem;
                }

                .icon-large {
                    width: 2rem;
                    height: 2rem;
                }

                .icon-tile {
                    padding: 0.75rem;
                    border-radius: 0.5rem;
                    background: rgba(168, 85, 247, 0.1);
                    transition: background 0.3s;
                    display: inline-flex;
                }

                .card-hover:hover .icon-tile {
                    background: rgba(168, 85, 247, 0.2);
                }

                .icon-tile-round {
                    padding: 1rem;
                    border-radius: 9999px;
                }

                .grid {
                    display: grid;
                    gap: 2rem;
                }

                .grid-4 {
                    grid-template-columns: repeat(2, 1fr);
                }

                /* Hero */
                .hero {
                    padding-top: 8rem;
                }

                .hero-inner {
                    max-width: 56rem;
                    margin: 0 auto;
                    text-align: center;
                }

                .hero-badge, .cta-badge {
                    margin-bottom: 2rem;
                }

                .hero-title {
                    font-size: 3.75rem;
                    font-weight: 700;
                    line-height: 1.25;
                    margin: 0 0 1.5rem;
                }

                .hero-title-plain {
                    color: #ffffff;
                }

                .hero-subtitle, .cta-text {
                    font-size: 1.25rem;
                    color: #d1d5db;
                    line-height: 1.6;
                    margin: 0 0 3rem;
                }

                .cta-text {
                    margin-bottom: 2rem;
                }

                .hero-highlights {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 1.5rem;
                    justify-content: center;
                }

                .hero-highlight {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    color: #d1d5db;
                }

                .feature-body {
                    display: flex;
                    align-items: flex-start;
                    gap: 1rem;
                }

                .tech-body {
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    gap: 1rem;
                }

                .testimonials {
                    max-width: 72rem;
                    margin: 0 auto;
                }

                .quote {
                    margin-bottom: 1rem;
                }

                .quote-author {
                    font-weight: 600;
                    margin: 0;
                }

                .quote-role {
                    color: #9ca3af;
                    margin: 0;
                }

                /* FAQ */
                .faq-list, .cta {
                    max-width: 48rem;
                    margin: 0 auto;
                }

                .cta {
                    text-align: center;
                }

                .accordion > * + * {
                    margin-top: 1rem;
                }

                .accordion-item {
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    border-radius: 0.5rem;
                }

                .accordion-trigger {
                    width: 100%;
                    padding: 1rem 1.5rem;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    text-align: left;
                    font-size: 1rem;
                    color: #ffffff;
                    background: transparent;
                    border: none;
                    cursor: pointer;
                    transition: color 0.2s;
                }

                .accordion-trigger:hover {
                    color: #c084fc;
                }

                .accordion-indicator {
                    display: inline-block;
                    transition: transform 0.2s;
                }

                .accordion-indicator.rotated {
                    transform: rotate(180deg);
                }

                .accordion-content {
                    padding: 1rem 1.5rem;
                    color: #d1d5db;
                }

                /* Footer */
                .site-footer {
                    padding: 3rem 1.5rem;
                    border-top: 1px solid rgba(255, 255, 255, 0.05);
                }

                .footer-content {
                    display: flex;
                    flex-direction: column;
                    justify-content: space-between;
                    align-items: center;
                    gap: 1.5rem;
                }

                .footer-copy {
                    color: #9ca3af;
                    margin: 0;
                }

                /* Motion */
                .reveal {
                    opacity: 0;
                    transform: translateY(20px);
                    transition: opacity 0.6s, transform 0.6s;
                }

                .reveal.visible {
                    opacity: 1;
                    transform: translateY(0);
                }

                .enter-on-mount {
                    animation: fadeInUp 0.6s ease-out both;
                }

                .floating {
                    animation: float 3s ease-in-out infinite;
                }

                .hover-scale {
                    transition: transform 0.3s;
                }

                @keyframes fadeInUp {
                    from { opacity: 0; transform: translateY(20px); }
                    to { opacity: 1; transform: translateY(0); }
                }

                @keyframes float {
                    0%, 100% { transform: translateY(0); }
                    50% { transform: translateY(-10px); }
                }

                @keyframes slideDown {
                    from { transform: translateY(-100px); }
                    to { transform: translateY(0); }
                }

                @media (min-width: 640px) {
                    .hero-title {
                        font-size: 4.5rem;
                    }
                }

                @media (min-width: 768px) {
                    .grid-2 {
                        grid-template-columns: repeat(2, 1fr);
                    }

                    .grid-3 {
                        grid-template-columns: repeat(3, 1fr);
                    }

                    .grid-4 {
                        grid-template-columns: repeat(4, 1fr);
                    }

                    .footer-content {
                        flex-direction: row;
                    }
                }

                @media (prefers-reduced-motion: reduce) {
                    .reveal, .enter-on-mount, .floating, .site-header {
                        animation: none;
                        transition: none;
                    }
                }
                "#}
            </style>
        </main>
    }
}
