pub const BASE_COMPONENTS: &str = r#"
/* Base Component Styles */

.container {
  max-width: var(--container-width);
  margin: 0 auto;
  padding: 0 var(--space-4);
}

.sr-only {
  position: absolute;
  width: 1px;
  height: 1px;
  overflow: hidden;
  clip: rect(0, 0, 0, 0);
  white-space: nowrap;
}

/* Icons */
.icon {
  width: 20px;
  height: 20px;
  flex-shrink: 0;
}

.icon-sm {
  width: 16px;
  height: 16px;
}

.icon.star {
  color: var(--star);
  fill: currentColor;
}

/* Buttons */
.btn {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  gap: var(--space-2);
  padding: var(--space-2) var(--space-4);
  border-radius: var(--radius-md);
  font-weight: 500;
  cursor: pointer;
  border: 1px solid transparent;
  transition: background-color var(--transition-fast) var(--easing-standard),
              transform var(--transition-fast) var(--easing-standard);
}

.btn:active {
  transform: scale(0.97);
}

.btn-primary {
  background-color: var(--brand-primary);
  color: var(--brand-primary-foreground);
}

.btn-primary:hover {
  background-color: var(--brand-accent);
}

.btn-outline {
  background-color: transparent;
  border-color: var(--border);
  color: var(--text-primary);
}

.btn-outline:hover {
  border-color: var(--brand-primary);
}

.btn-ghost {
  background: transparent;
  color: var(--text-primary);
}

.btn-inverse {
  background-color: #FFFFFF;
  color: var(--brand-primary);
}

.btn-sm {
  padding: var(--space-1) var(--space-3);
  font-size: 0.875rem;
}

.btn-lg {
  padding: var(--space-3) var(--space-6);
  font-size: 1rem;
}

.btn-pill {
  border-radius: var(--radius-full);
}

.btn-icon {
  position: relative;
  width: 36px;
  height: 36px;
  padding: 0;
  overflow: hidden;
}

.btn-trailing-icon {
  width: 16px;
  height: 16px;
}

/* Badges */
.badge {
  display: inline-flex;
  align-items: center;
  padding: var(--space-1) var(--space-3);
  border-radius: var(--radius-full);
  font-size: 0.8rem;
  font-weight: 500;
}

.badge-brand {
  background-color: var(--brand-secondary);
  color: var(--brand-primary);
  margin-bottom: var(--space-4);
}

.badge-glass {
  background-color: rgba(255, 255, 255, 0.9);
  color: #14201A;
}

/* Inputs */
.form-input {
  width: 100%;
  padding: var(--space-3) var(--space-4);
  border-radius: var(--radius-md);
  border: 1px solid var(--border);
  background-color: var(--surface);
  color: var(--text-primary);
  font-size: 1rem;
}

.form-input:focus {
  outline: none;
  border-color: var(--brand-primary);
}

/* Theme toggle */
.theme-icon {
  position: absolute;
  display: flex;
  opacity: 0;
  transform: scale(0);
  transition: opacity 200ms var(--easing-standard), transform 200ms var(--easing-standard);
}

.theme-icon.active {
  opacity: 1;
  transform: scale(1);
}

/* Like button */
.like-button {
  position: absolute;
  top: var(--space-4);
  right: var(--space-4);
  display: flex;
  padding: var(--space-2);
  border: none;
  border-radius: var(--radius-full);
  background-color: var(--overlay);
  backdrop-filter: blur(8px);
  cursor: pointer;
  transition: transform var(--transition-fast) var(--easing-standard);
}

.like-button:hover {
  transform: scale(1.1);
}

.like-button:active {
  transform: scale(0.9);
}

.heart {
  color: var(--text-tertiary);
}

.heart.liked {
  color: var(--heart);
  fill: currentColor;
}
"#;
