pub const HOME_STYLES: &str = r#"
/* Landing Page Styles */

section {
  padding: var(--space-20) 0;
}

.section-heading {
  text-align: center;
  margin-bottom: var(--space-12);
}

.section-title {
  font-size: 2.5rem;
  font-weight: 700;
  margin-bottom: var(--space-4);
  color: var(--text-primary);
}

.section-subtitle {
  font-size: 1.25rem;
  color: var(--text-secondary);
  max-width: 640px;
  margin: 0 auto;
}

.muted {
  color: var(--text-secondary);
}

/* Floating navigation */
.floating-nav {
  position: fixed;
  top: var(--space-4);
  left: 50%;
  transform: translateX(-50%);
  z-index: 50;
  padding: var(--space-3) var(--space-6);
  border-radius: var(--radius-full);
  border: 1px solid var(--border);
  background-color: var(--overlay);
  backdrop-filter: blur(24px);
  box-shadow: var(--shadow-lg);
  animation: nav-drop var(--transition-slow) var(--easing-standard) backwards;
}

.nav-container {
  display: flex;
  align-items: center;
  gap: var(--space-8);
}

.logo {
  display: flex;
  align-items: center;
  gap: var(--space-2);
  color: var(--text-primary);
  text-decoration: none;
  transition: transform var(--transition-fast) var(--easing-standard);
}

.logo:hover {
  transform: scale(1.05);
}

.brand-icon {
  width: 24px;
  height: 24px;
  color: var(--brand-primary);
}

.brand-name {
  font-weight: 700;
}

.nav-links {
  display: flex;
  gap: var(--space-6);
  font-size: 0.875rem;
}

.nav-link {
  color: var(--text-secondary);
  text-decoration: none;
  transition: color var(--transition-fast) var(--easing-standard);
}

.nav-link:hover {
  color: var(--text-primary);
}

.nav-actions {
  display: flex;
  align-items: center;
  gap: var(--space-3);
}

@media (max-width: 768px) {
  .nav-links {
    display: none;
  }
}

/* Hero */
.hero {
  position: relative;
  min-height: 100vh;
  display: flex;
  align-items: center;
  overflow: hidden;
}

.hero-backdrop {
  position: absolute;
  inset: 0;
  z-index: 0;
  will-change: transform;
}

.hero-gradient {
  position: absolute;
  inset: 0;
  background: linear-gradient(135deg,
    color-mix(in srgb, var(--brand-primary) 20%, transparent),
    transparent,
    color-mix(in srgb, var(--brand-accent) 20%, transparent));
}

.hero-glow {
  position: absolute;
  inset: 0;
  opacity: 0.1;
  background: radial-gradient(circle at 50% 50%, var(--brand-primary) 0%, transparent 50%);
}

.hero-grid {
  position: relative;
  z-index: 1;
  display: grid;
  grid-template-columns: 1fr 1fr;
  gap: var(--space-12);
  align-items: center;
  padding-top: var(--space-20);
}

.hero-content {
  display: flex;
  flex-direction: column;
  gap: var(--space-8);
  will-change: transform;
}

.hero-title {
  font-size: 4.5rem;
  font-weight: 700;
  line-height: 1.1;
  color: var(--text-primary);
}

.title-line {
  display: block;
}

.brand-text {
  color: var(--brand-primary);
}

.hero-subtitle {
  font-size: 1.25rem;
  color: var(--text-secondary);
  max-width: 32rem;
}

.search-form {
  display: flex;
  gap: var(--space-2);
  padding: var(--space-2);
  border-radius: var(--radius-lg);
  border: 1px solid var(--border);
  background-color: var(--surface);
  box-shadow: var(--shadow-md);
}

.search-input {
  position: relative;
  flex: 1;
  display: flex;
  align-items: center;
}

.search-icon {
  position: absolute;
  left: var(--space-3);
  color: var(--text-tertiary);
}

.search-input .form-input {
  border: none;
  padding-left: 40px;
}

.hero-proof {
  display: flex;
  align-items: center;
  gap: var(--space-8);
  font-size: 0.875rem;
  color: var(--text-secondary);
}

.avatar-stack {
  display: flex;
}

.avatar-dot {
  width: 32px;
  height: 32px;
  margin-left: -8px;
  border-radius: var(--radius-full);
  border: 2px solid var(--background);
  background-color: var(--brand-primary);
}

.avatar-dot:first-child {
  margin-left: 0;
}

.rating {
  display: flex;
  align-items: center;
  gap: var(--space-1);
}

.hero-card-wrap {
  position: relative;
}

.floating-bolt {
  position: absolute;
  top: -16px;
  right: -16px;
  display: flex;
  padding: var(--space-3);
  border-radius: var(--radius-full);
  background-color: var(--brand-primary);
  color: var(--brand-primary-foreground);
  box-shadow: var(--shadow-lg);
}

@media (max-width: 960px) {
  .hero-grid {
    grid-template-columns: 1fr;
  }

  .hero-title {
    font-size: 3rem;
  }
}

/* Cabin cards */
.cabin-card {
  overflow: hidden;
  border-radius: var(--radius-lg);
  background-color: var(--surface);
  box-shadow: var(--shadow-md);
  transition: transform var(--transition-normal) var(--easing-standard),
              box-shadow var(--transition-normal) var(--easing-standard);
}

.cabin-card:hover {
  transform: translateY(-10px);
  box-shadow: var(--shadow-lg);
}

.cabin-card.featured {
  transform: rotate(1deg);
}

.cabin-image img {
  width: 100%;
  height: 100%;
  object-fit: cover;
  transition: transform 700ms var(--easing-standard);
}

.cabin-card:hover .cabin-image img {
  transform: scale(1.1);
}

.featured-badge {
  position: absolute;
  top: var(--space-4);
  left: var(--space-4);
  margin: 0;
  background-color: var(--brand-primary);
  color: var(--brand-primary-foreground);
}

.amenity-badges {
  position: absolute;
  bottom: var(--space-4);
  left: var(--space-4);
  display: flex;
  gap: var(--space-2);
}

.cabin-header,
.cabin-footer {
  display: flex;
  justify-content: space-between;
  align-items: flex-start;
}

.cabin-header {
  margin-bottom: var(--space-4);
}

.cabin-footer {
  align-items: center;
}

.cabin-title {
  font-size: 1.25rem;
  font-weight: 600;
  color: var(--text-primary);
}

.cabin-location,
.meta-item {
  display: flex;
  align-items: center;
  gap: var(--space-1);
  color: var(--text-secondary);
  font-size: 0.875rem;
}

.cabin-meta {
  display: flex;
  gap: var(--space-4);
}

.cabin-price {
  text-align: right;
}

.price {
  font-size: 1.5rem;
  font-weight: 700;
  color: var(--text-primary);
}

.per-night {
  font-size: 0.875rem;
  color: var(--text-secondary);
}

/* Stats */
.stats-section {
  background-color: var(--surface-muted);
}

.stats-grid {
  display: grid;
  grid-template-columns: repeat(4, 1fr);
  gap: var(--space-8);
  text-align: center;
}

.stat {
  opacity: 0;
  transform: translateY(30px);
  transition: opacity var(--transition-slow) var(--easing-standard),
              transform var(--transition-slow) var(--easing-standard);
}

.stat .stat-value {
  transform: scale(0);
  transition: transform var(--transition-slow) cubic-bezier(0.34, 1.56, 0.64, 1);
}

.stat.revealed {
  opacity: 1;
  transform: translateY(0);
}

.stat.revealed .stat-value {
  transform: scale(1);
}

.stat-value {
  font-size: 3rem;
  font-weight: 700;
  color: var(--brand-primary);
  margin-bottom: var(--space-2);
}

.stat-label {
  color: var(--text-secondary);
  font-weight: 500;
}

@media (max-width: 768px) {
  .stats-grid {
    grid-template-columns: repeat(2, 1fr);
  }
}

/* Explore */
.category-filter {
  display: flex;
  flex-wrap: wrap;
  justify-content: center;
  gap: var(--space-4);
  margin-bottom: var(--space-12);
}

.category-pill {
  padding: var(--space-3) var(--space-6);
  border-radius: var(--radius-full);
  border: 2px solid var(--border);
  background-color: var(--surface);
  color: var(--text-primary);
  font-weight: 500;
  cursor: pointer;
  transition: transform var(--transition-fast) var(--easing-standard),
              border-color var(--transition-fast) var(--easing-standard);
}

.category-pill:hover {
  transform: scale(1.05);
  border-color: var(--brand-primary);
}

.category-pill:active {
  transform: scale(0.95);
}

.category-pill.selected {
  background-color: var(--brand-primary);
  border-color: var(--brand-primary);
  color: var(--brand-primary-foreground);
}

.category-count {
  margin-left: var(--space-2);
  font-size: 0.875rem;
  opacity: 0.7;
}

.cabin-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(320px, 1fr));
  gap: var(--space-8);
}

/* Features */
.features-section {
  background-color: var(--surface-muted);
}

.features-grid {
  display: grid;
  grid-template-columns: 1fr 1fr;
  gap: var(--space-16);
  align-items: center;
}

.features-copy .section-subtitle {
  margin: 0 0 var(--space-8) 0;
}

.feature-list {
  display: flex;
  flex-direction: column;
  gap: var(--space-6);
}

.feature-item {
  display: flex;
  align-items: flex-start;
  gap: var(--space-4);
}

.feature-icon {
  display: flex;
  padding: var(--space-3);
  border-radius: var(--radius-md);
  background-color: var(--brand-secondary);
  color: var(--brand-primary);
}

.feature-title {
  font-size: 1.125rem;
  font-weight: 600;
  margin-bottom: var(--space-1);
}

.feature-desc {
  color: var(--text-secondary);
}

.features-visual {
  position: relative;
}

.features-visual img {
  width: 100%;
  height: auto;
  border-radius: var(--radius-lg);
  box-shadow: var(--shadow-lg);
}

.floating-chip {
  position: absolute;
  display: flex;
  align-items: center;
  gap: var(--space-2);
  padding: var(--space-3) var(--space-4);
  border-radius: var(--radius-lg);
  background-color: var(--surface);
  box-shadow: var(--shadow-lg);
  font-weight: 600;
  font-size: 0.875rem;
}

.chip-top {
  top: -24px;
  left: -24px;
}

.chip-bottom {
  bottom: -24px;
  right: -24px;
  color: var(--brand-primary);
}

@media (max-width: 960px) {
  .features-grid {
    grid-template-columns: 1fr;
  }
}

/* Testimonials */
.testimonial-stage {
  position: relative;
  max-width: 56rem;
  margin: 0 auto;
  min-height: 320px;
}

.testimonial-slot.cross-fade-out {
  position: absolute;
  inset: 0;
  pointer-events: none;
}

.testimonial-card {
  text-align: center;
  padding: var(--space-12);
  border-radius: var(--radius-lg);
  background-color: var(--surface);
  box-shadow: var(--shadow-lg);
}

.testimonial-card .rating {
  justify-content: center;
  margin-bottom: var(--space-6);
}

.testimonial-card .star {
  width: 24px;
  height: 24px;
}

.testimonial-quote {
  font-size: 1.75rem;
  font-weight: 500;
  line-height: 1.5;
  margin-bottom: var(--space-8);
}

.testimonial-author {
  display: flex;
  align-items: center;
  justify-content: center;
  gap: var(--space-4);
  text-align: left;
}

.avatar {
  border-radius: var(--radius-full);
}

.author-name {
  font-weight: 600;
  font-size: 1.125rem;
}

.author-role {
  color: var(--text-secondary);
}

.testimonial-indicators {
  display: flex;
  justify-content: center;
  gap: var(--space-2);
  margin-top: var(--space-8);
}

.indicator {
  width: 12px;
  height: 12px;
  border: none;
  border-radius: var(--radius-full);
  background-color: color-mix(in srgb, var(--text-tertiary) 30%, transparent);
  cursor: pointer;
  transition: width var(--transition-normal) var(--easing-standard),
              background-color var(--transition-normal) var(--easing-standard);
}

.indicator.active {
  width: 32px;
  background-color: var(--brand-primary);
}

/* Call to action */
.cta-section {
  background: linear-gradient(90deg, var(--brand-primary), var(--brand-accent));
  color: #FFFFFF;
  text-align: center;
}

.cta-title {
  font-size: 2.5rem;
  font-weight: 700;
  margin-bottom: var(--space-6);
}

.cta-subtitle {
  font-size: 1.25rem;
  opacity: 0.9;
  max-width: 40rem;
  margin: 0 auto var(--space-8);
}

.cta-form {
  display: flex;
  gap: var(--space-4);
  max-width: 28rem;
  margin: 0 auto;
}

.cta-input {
  background-color: rgba(255, 255, 255, 0.1);
  border-color: rgba(255, 255, 255, 0.2);
  color: #FFFFFF;
}

.cta-input::placeholder {
  color: rgba(255, 255, 255, 0.7);
}

/* Footer */
.site-footer {
  padding: var(--space-16) 0 var(--space-8);
  border-top: 1px solid var(--border);
  background-color: var(--surface);
}

.footer-grid {
  display: grid;
  grid-template-columns: repeat(4, 1fr);
  gap: var(--space-8);
}

.footer-blurb {
  color: var(--text-secondary);
  margin: var(--space-4) 0;
}

.contact-links {
  display: flex;
  gap: var(--space-4);
}

.contact-link {
  color: var(--text-secondary);
  transition: color var(--transition-fast) var(--easing-standard);
}

.contact-link:hover {
  color: var(--brand-primary);
}

.footer-heading {
  font-weight: 600;
  margin-bottom: var(--space-4);
}

.footer-section ul {
  list-style: none;
  display: flex;
  flex-direction: column;
  gap: var(--space-2);
}

.footer-link {
  color: var(--text-secondary);
  text-decoration: none;
  font-size: 0.875rem;
}

.footer-link:hover {
  color: var(--text-primary);
}

.footer-bottom {
  display: flex;
  justify-content: space-between;
  align-items: center;
  margin-top: var(--space-12);
  padding-top: var(--space-8);
  border-top: 1px solid var(--border);
  color: var(--text-secondary);
  font-size: 0.875rem;
}

.legal-links {
  display: flex;
  gap: var(--space-6);
}

@media (max-width: 768px) {
  .footer-grid {
    grid-template-columns: 1fr 1fr;
  }

  .footer-bottom {
    flex-direction: column;
    gap: var(--space-4);
  }
}
"#;
